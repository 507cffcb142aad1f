use std::path::PathBuf;

use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

use polyglot_lsp::Backend;
use polyglot_lsp::config::Config;

/// Completion language server for the online multi-language code
/// editor. Speaks LSP over stdio.
#[derive(Debug, Parser)]
#[command(name = "polyglot-lsp", version, about)]
struct Args {
    /// Path to a config.toml (defaults to the platform config
    /// directory).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the LSP transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(args.config.as_deref());

    let (service, socket) = LspService::new(move |client| Backend::new(client, config));
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;
}
