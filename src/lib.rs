//! polyglot_lsp: completion language server for a multi-language
//! online code editor.
//!
//! The frontend is a browser editor where users pick one of five
//! languages, write code, and run it against a remote execution
//! service. This crate is the brains behind its autocompletion: static
//! keyword lists for every language, and for Java a namespace index
//! plus a declaration tracker that turns `List x = new ArrayList<…>(`
//! followed by `x.` into instance-method suggestions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tower_lsp::Client;
use tower_lsp::lsp_types::MessageType;

pub mod catalog;
pub mod completion;
pub mod config;
pub mod extraction;
pub mod keywords;
pub mod namespace;
pub mod runner;
pub mod server;
pub mod session;
pub mod skills;
pub mod types;

use crate::completion::engine::CompletionEngine;
use crate::config::Config;
use crate::runner::ExecClient;
use crate::session::LanguageSession;
use crate::skills::SkillsClient;

pub struct Backend {
    name: String,
    version: String,
    /// Document URI → full buffer text (full-sync).
    open_files: Arc<Mutex<HashMap<String, String>>>,
    /// Document URI → the session owning that document's declaration
    /// table. Replaced whole when a document is (re)opened.
    sessions: Arc<Mutex<HashMap<String, LanguageSession>>>,
    /// Shared read-only completion machinery (namespace index, keyword
    /// tables).
    engine: Arc<CompletionEngine>,
    exec: ExecClient,
    skills_client: SkillsClient,
    client: Option<Client>,
}

impl Backend {
    pub fn new(client: Client, config: Config) -> Self {
        Self::with_client(Some(client), config)
    }

    pub fn new_test() -> Self {
        Self::with_client(None, Config::default())
    }

    pub fn new_test_with_config(config: Config) -> Self {
        Self::with_client(None, config)
    }

    fn with_client(client: Option<Client>, config: Config) -> Self {
        let exec = ExecClient::new(config.endpoints.run_url.clone());
        let skills_client = SkillsClient::new(config.endpoints.upload_url.clone());
        Self {
            name: "PolyglotLSP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            open_files: Arc::new(Mutex::new(HashMap::new())),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            engine: Arc::new(CompletionEngine::new(config)),
            exec,
            skills_client,
            client,
        }
    }

    /// Public helper for tests: the tracked type of a variable inside a
    /// document's session.
    pub fn session_type_of(&self, uri: &str, variable: &str) -> Option<String> {
        if let Ok(sessions) = self.sessions.lock() {
            sessions
                .get(uri)
                .and_then(|s| s.type_of(variable))
                .map(str::to_string)
        } else {
            None
        }
    }

    /// Public helper for tests: the language id of a document's session.
    pub fn session_language(&self, uri: &str) -> Option<String> {
        if let Ok(sessions) = self.sessions.lock() {
            sessions.get(uri).map(|s| s.language_id().to_string())
        } else {
            None
        }
    }

    pub(crate) async fn log(&self, typ: MessageType, message: String) {
        if let Some(client) = &self.client {
            client.log_message(typ, message).await;
        }
    }
}
