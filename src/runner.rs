//! Remote code-execution client.
//!
//! The editor's Run button posts the buffer and language to an external
//! execution service and shows the program output next to the expected
//! output. This module owns that boundary: payload construction,
//! response decoding, and the three-way error taxonomy the frontend
//! renders verbatim.
//!
//! Failures never escape as panics or protocol errors; they become a
//! `RunError`, whose [`RunError::render`] form is the exact user-facing
//! string:
//!
//! - server answered with an error body → `Error: <detail>`
//! - request sent but nothing came back → `Error: No response received
//!   from server`
//! - the request could not be built or its response not decoded →
//!   `Error: <message>`

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::Language;

/// Wire payload for the run endpoint.
#[derive(Debug, Serialize)]
pub struct RunPayload<'a> {
    pub code: &'a str,
    pub language: &'a str,
}

/// Successful run response.
#[derive(Debug, Deserialize)]
pub struct RunOutput {
    pub output: String,
}

/// Error body the execution service returns on failed runs
/// (compile errors, unsupported language, sandbox refusal, …).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// What went wrong talking to a remote endpoint.
#[derive(Debug, Error)]
pub enum RunError {
    /// The service responded with an error and a human-readable detail.
    #[error("{0}")]
    Server(String),
    /// The request went out but no response ever arrived.
    #[error("No response received from server")]
    NoResponse,
    /// The request could not be constructed, or its response could not
    /// be decoded, locally.
    #[error("{0}")]
    Request(String),
}

impl RunError {
    /// The user-facing rendering shown in the output pane.
    pub fn render(&self) -> String {
        format!("Error: {}", self)
    }
}

/// Client for the remote execution endpoint.
pub struct ExecClient {
    http: reqwest::Client,
    run_url: String,
}

impl ExecClient {
    pub fn new(run_url: impl Into<String>) -> Self {
        ExecClient {
            http: reqwest::Client::new(),
            run_url: run_url.into(),
        }
    }

    /// Run `code` under `language` on the execution service and return
    /// its output, trimmed the way the frontend displays it.
    pub async fn run(&self, code: &str, language: Language) -> Result<String, RunError> {
        debug!(language = language.as_str(), bytes = code.len(), "submitting run");

        let response = self
            .http
            .post(&self.run_url)
            .json(&RunPayload {
                code,
                language: language.as_str(),
            })
            .send()
            .await
            .map_err(classify_transport_error)?;

        let body: RunOutput = read_json(response).await?;
        Ok(body.output.trim().to_string())
    }
}

/// Whether an actual run output satisfies the expected output. The
/// comparison is exact; `actual` is expected to be pre-trimmed by
/// [`ExecClient::run`].
pub fn outputs_match(expected: &str, actual: &str) -> bool {
    expected == actual
}

/// Map a `send()` failure into the taxonomy: a request that could not
/// even be built is a local failure; everything past that point means
/// the service never answered.
pub(crate) fn classify_transport_error(err: reqwest::Error) -> RunError {
    if err.is_builder() {
        RunError::Request(err.to_string())
    } else {
        RunError::NoResponse
    }
}

/// Decode a JSON response body, turning error-status responses into
/// `RunError::Server` with the service's own detail string when it
/// provides one.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RunError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| RunError::Request(err.to_string()))
    } else {
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => status.to_string(),
        };
        Err(RunError::Server(detail))
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
