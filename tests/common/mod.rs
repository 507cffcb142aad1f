#![allow(dead_code)]

use polyglot_lsp::Backend;
use tower_lsp::LanguageServer;
use tower_lsp::lsp_types::*;

pub fn create_test_backend() -> Backend {
    Backend::new_test()
}

/// Helper: open a document with the given language id and text.
pub async fn open_document(backend: &Backend, uri: &Url, language_id: &str, text: &str) {
    let params = DidOpenTextDocumentParams {
        text_document: TextDocumentItem {
            uri: uri.clone(),
            language_id: language_id.to_string(),
            version: 1,
            text: text.to_string(),
        },
    };
    backend.did_open(params).await;
}

/// Helper: replace a document's text (full sync).
pub async fn change_document(backend: &Backend, uri: &Url, text: &str) {
    let params = DidChangeTextDocumentParams {
        text_document: VersionedTextDocumentIdentifier {
            uri: uri.clone(),
            version: 2,
        },
        content_changes: vec![TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: text.to_string(),
        }],
    };
    backend.did_change(params).await;
}

/// Helper: request completion at a position and unwrap the item array.
pub async fn completion_at(
    backend: &Backend,
    uri: &Url,
    line: u32,
    character: u32,
) -> Vec<CompletionItem> {
    let params = CompletionParams {
        text_document_position: TextDocumentPositionParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
            position: Position { line, character },
        },
        work_done_progress_params: WorkDoneProgressParams::default(),
        partial_result_params: PartialResultParams::default(),
        context: None,
    };

    let result = backend
        .completion(params)
        .await
        .expect("completion request failed");

    match result {
        Some(CompletionResponse::Array(items)) => items,
        Some(_) => panic!("Expected Array response"),
        None => Vec::new(),
    }
}

pub fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|i| i.label.as_str()).collect()
}

pub fn labels_of_kind(items: &[CompletionItem], kind: CompletionItemKind) -> Vec<&str> {
    items
        .iter()
        .filter(|i| i.kind == Some(kind))
        .map(|i| i.label.as_str())
        .collect()
}
