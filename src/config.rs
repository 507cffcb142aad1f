//! Server configuration.
//!
//! Configuration is a single optional TOML file. Nothing in it is
//! required: the compiled-in defaults match the development setup of
//! the editor frontend (execution service on localhost:8000).
//!
//! ```toml
//! [endpoints]
//! run_url = "http://localhost:8000/api/run"
//! upload_url = "http://localhost:8000/upload/jd"
//!
//! [keywords]
//! # Override the baseline completion list for a language id.
//! python = ["def", "class", "import"]
//! ```
//!
//! The file is looked up at `<config-dir>/polyglot-lsp/config.toml`
//! unless an explicit path is given on the command line. A missing or
//! malformed file falls back to defaults; configuration problems are
//! never fatal.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use etcetera::{BaseStrategy, choose_base_strategy};
use serde::Deserialize;
use tracing::warn;

use crate::keywords;

const DEFAULT_RUN_URL: &str = "http://localhost:8000/api/run";
const DEFAULT_UPLOAD_URL: &str = "http://localhost:8000/upload/jd";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoints: Endpoints,
    /// Per-language-id overrides of the baseline keyword lists.
    pub keywords: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    /// Remote code-execution endpoint.
    pub run_url: String,
    /// File-upload / skill-extraction endpoint.
    pub upload_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            run_url: DEFAULT_RUN_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `explicit` when given, otherwise from the
    /// platform config directory. Absent files are the normal case and
    /// yield defaults silently; unreadable or malformed files yield
    /// defaults with a warning.
    pub fn load(explicit: Option<&Path>) -> Config {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Config::default(),
            },
        };

        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(err) => {
                    warn!(path = %path.display(), %err, "ignoring malformed config file");
                    Config::default()
                }
            },
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable config file");
                Config::default()
            }
        }
    }

    /// The baseline keyword list for a language id: the configured
    /// override when present, else the compiled-in default, else empty
    /// (unknown language ids complete to nothing).
    pub fn keywords_for(&self, language_id: &str) -> Vec<&str> {
        if let Some(list) = self.keywords.get(language_id) {
            return list.iter().map(String::as_str).collect();
        }
        match keywords::builtin_keywords(language_id) {
            Some(list) => list.to_vec(),
            None => Vec::new(),
        }
    }
}

/// `<config-dir>/polyglot-lsp/config.toml` per the platform base
/// strategy (XDG on Linux, Application Support on macOS, …).
fn default_config_path() -> Option<PathBuf> {
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("polyglot-lsp").join("config.toml"))
}
