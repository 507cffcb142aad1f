/// LSP server trait implementation.
///
/// This module contains the `impl LanguageServer for Backend` block,
/// which handles all LSP protocol messages (initialize, didOpen,
/// didChange, didClose, completion, executeCommand).
use serde::Deserialize;
use serde_json::Value;
use tower_lsp::LanguageServer;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::completion::builder;
use crate::session::LanguageSession;
use crate::types::{CompletionRequest, Language};

/// Command id for running the current buffer on the execution service.
pub const RUN_CODE_COMMAND: &str = "polyglot.runCode";
/// Command id for uploading a job-description file for skill extraction.
pub const EXTRACT_SKILLS_COMMAND: &str = "polyglot.extractSkills";

#[derive(Debug, Deserialize)]
struct RunCodeArgs {
    code: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct ExtractSkillsArgs {
    path: String,
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    trigger_characters: Some(vec![".".to_string()]),
                    all_commit_characters: None,
                    work_done_progress_options: WorkDoneProgressOptions {
                        work_done_progress: None,
                    },
                    completion_item: None,
                }),
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: vec![
                        RUN_CODE_COMMAND.to_string(),
                        EXTRACT_SKILLS_COMMAND.to_string(),
                    ],
                    work_done_progress_options: WorkDoneProgressOptions {
                        work_done_progress: None,
                    },
                }),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: self.name.clone(),
                version: Some(self.version.clone()),
            }),
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.log(MessageType::INFO, "PolyglotLSP initialized!".to_string())
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        let uri = doc.uri.to_string();
        let text = doc.text;
        let language_id = doc.language_id;

        // Store file content
        if let Ok(mut files) = self.open_files.lock() {
            files.insert(uri.clone(), text.clone());
        }

        // A (re)open is the language-switch boundary: the previous
        // session for this URI, declaration table included, is
        // discarded whole and a fresh one installed before any further
        // completion request is served. Rescanning rebuilds the table
        // from a pasted or reloaded buffer.
        let mut session = LanguageSession::new(language_id.as_str());
        session.rescan(&text);
        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.insert(uri.clone(), session);
        }

        self.log(
            MessageType::INFO,
            format!("Opened file: {} ({})", uri, language_id),
        )
        .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri.to_string();

        if let Some(change) = params.content_changes.first() {
            let text = &change.text;

            // Full sync: the change carries the whole buffer.
            if let Ok(mut files) = self.open_files.lock() {
                files.insert(uri.clone(), text.clone());
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri.to_string();

        if let Ok(mut files) = self.open_files.lock() {
            files.remove(&uri);
        }

        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.remove(&uri);
        }

        self.log(MessageType::INFO, format!("Closed file: {}", uri))
            .await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri.to_string();
        let position = params.text_document_position.position;

        let content = if let Ok(files) = self.open_files.lock() {
            files.get(&uri).cloned()
        } else {
            None
        };

        // Unknown documents complete to nothing, never an error.
        let Some(content) = content else {
            return Ok(Some(CompletionResponse::Array(Vec::new())));
        };

        let items = if let Ok(mut sessions) = self.sessions.lock() {
            match sessions.get_mut(&uri) {
                Some(session) => {
                    let language_id = session.language_id().to_string();
                    let request = CompletionRequest {
                        source_text: &content,
                        cursor_line: position.line,
                        cursor_column: position.character,
                        language_id: &language_id,
                    };
                    let suggestions = self.engine.complete(&request, session);
                    builder::to_completion_items(&suggestions)
                }
                None => Vec::new(),
            }
        } else {
            Vec::new()
        };

        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        match params.command.as_str() {
            RUN_CODE_COMMAND => {
                let Some(args) = parse_args::<RunCodeArgs>(params.arguments) else {
                    return Ok(Some(Value::String(
                        "Error: invalid runCode arguments".to_string(),
                    )));
                };

                // Remote failure is rendered, not raised: the RPC
                // succeeds and carries the string the widget displays.
                let outcome = match Language::from_id(&args.language) {
                    Some(language) => match self.exec.run(&args.code, language).await {
                        Ok(output) => output,
                        Err(err) => err.render(),
                    },
                    None => format!("Error: unsupported language: {}", args.language),
                };

                Ok(Some(Value::String(outcome)))
            }
            EXTRACT_SKILLS_COMMAND => {
                let Some(args) = parse_args::<ExtractSkillsArgs>(params.arguments) else {
                    return Ok(Some(Value::String(
                        "Error: invalid extractSkills arguments".to_string(),
                    )));
                };

                let bytes = match tokio::fs::read(&args.path).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        return Ok(Some(Value::String(format!("Error: {}", err))));
                    }
                };

                let file_name = std::path::Path::new(&args.path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "upload".to_string());

                let outcome = match self.skills_client.upload(&file_name, bytes).await {
                    Ok(response) => serde_json::to_value(ExtractSkillsResult {
                        message: response.message,
                        skills: response.skills.skills,
                        job_description: response.skills.job_description,
                    })
                    .unwrap_or(Value::Null),
                    Err(err) => Value::String(err.render()),
                };

                Ok(Some(outcome))
            }
            _ => Ok(None),
        }
    }
}

/// Flattened executeCommand reply for skill extraction.
#[derive(Debug, serde::Serialize)]
struct ExtractSkillsResult {
    message: String,
    skills: Vec<String>,
    job_description: String,
}

/// The first positional argument of an executeCommand request, decoded
/// into the command's argument struct. `None` on absent or mismatched
/// arguments.
fn parse_args<T: serde::de::DeserializeOwned>(arguments: Vec<Value>) -> Option<T> {
    let first = arguments.into_iter().next()?;
    serde_json::from_value(first).ok()
}
