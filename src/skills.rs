//! Skill-extraction upload client.
//!
//! The editor's companion feature: upload a job-description file and
//! get back the skills the service extracted from it. One multipart
//! POST with a single `file` part; the response carries a status
//! message plus the extraction result.
//!
//! Shares the run client's error taxonomy and `"Error: …"` rendering.

use serde::Deserialize;

use crate::runner::{RunError, classify_transport_error, read_json};

/// The extraction result embedded in a successful upload response.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillExtraction {
    pub skills: Vec<String>,
    pub job_description: String,
}

/// Successful upload response.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub skills: SkillExtraction,
}

/// Client for the file-upload / skill-extraction endpoint.
pub struct SkillsClient {
    http: reqwest::Client,
    upload_url: String,
}

impl SkillsClient {
    pub fn new(upload_url: impl Into<String>) -> Self {
        SkillsClient {
            http: reqwest::Client::new(),
            upload_url: upload_url.into(),
        }
    }

    /// Upload one file and return the extraction result.
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, RunError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(classify_transport_error)?;

        read_json(response).await
    }
}
