mod common;

use common::{completion_at, create_test_backend, labels_of_kind, open_document};
use tower_lsp::LanguageServer;
use tower_lsp::lsp_types::*;

// ─── Session Lifecycle Tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_language_switch_discards_declarations() {
    let backend = create_test_backend();

    let uri = Url::parse("file:///editor-buffer").unwrap();
    let java_text = concat!("List x = new ArrayList<String>();\n", "x.");
    open_document(&backend, &uri, "java", java_text).await;
    assert_eq!(
        backend.session_type_of(uri.as_str(), "x").as_deref(),
        Some("ArrayList")
    );

    // The widget switches the editor to Python: same URI, new language.
    open_document(&backend, &uri, "python", java_text).await;
    assert_eq!(backend.session_language(uri.as_str()).as_deref(), Some("python"));
    assert_eq!(
        backend.session_type_of(uri.as_str(), "x"),
        None,
        "declaration table must be discarded whole on language switch"
    );

    // Even though the variable name recurs in the buffer, the new
    // session serves only the baseline list.
    let items = completion_at(&backend, &uri, 1, 2).await;
    let methods = labels_of_kind(&items, CompletionItemKind::METHOD);
    assert!(methods.is_empty(), "got: {:?}", methods);
}

#[tokio::test]
async fn test_switching_back_rescans_the_buffer() {
    let backend = create_test_backend();

    let uri = Url::parse("file:///editor-buffer").unwrap();
    let java_text = concat!("List x = new ArrayList<String>();\n", "x.");

    open_document(&backend, &uri, "java", java_text).await;
    open_document(&backend, &uri, "python", java_text).await;
    open_document(&backend, &uri, "java", java_text).await;

    // The fresh Java session rebuilt its table from the pasted buffer.
    assert_eq!(
        backend.session_type_of(uri.as_str(), "x").as_deref(),
        Some("ArrayList")
    );
    let items = completion_at(&backend, &uri, 1, 2).await;
    let methods = labels_of_kind(&items, CompletionItemKind::METHOD);
    assert!(methods.contains(&"add"), "got: {:?}", methods);
}

#[tokio::test]
async fn test_documents_have_independent_declaration_tables() {
    let backend = create_test_backend();

    let uri_a = Url::parse("file:///A.java").unwrap();
    let uri_b = Url::parse("file:///B.java").unwrap();
    open_document(
        &backend,
        &uri_a,
        "java",
        concat!("List x = new ArrayList<String>();\n", "x."),
    )
    .await;
    open_document(
        &backend,
        &uri_b,
        "java",
        concat!("Map x = new HashMap<String, Integer>();\n", "x."),
    )
    .await;

    let items_a = completion_at(&backend, &uri_a, 1, 2).await;
    let methods_a = labels_of_kind(&items_a, CompletionItemKind::METHOD);
    assert!(methods_a.contains(&"size"), "got: {:?}", methods_a);
    assert!(!methods_a.contains(&"put"), "got: {:?}", methods_a);

    let items_b = completion_at(&backend, &uri_b, 1, 2).await;
    let methods_b = labels_of_kind(&items_b, CompletionItemKind::METHOD);
    assert!(methods_b.contains(&"put"), "got: {:?}", methods_b);
    assert!(!methods_b.contains(&"size"), "got: {:?}", methods_b);
}

#[tokio::test]
async fn test_did_close_drops_session_and_buffer() {
    let backend = create_test_backend();

    let uri = Url::parse("file:///Main.java").unwrap();
    open_document(
        &backend,
        &uri,
        "java",
        "List x = new ArrayList<String>();",
    )
    .await;
    assert!(backend.session_language(uri.as_str()).is_some());

    backend
        .did_close(DidCloseTextDocumentParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
        })
        .await;

    assert_eq!(backend.session_language(uri.as_str()), None);
    assert_eq!(backend.session_type_of(uri.as_str(), "x"), None);
    let items = completion_at(&backend, &uri, 0, 0).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_reopening_same_language_starts_empty() {
    let backend = create_test_backend();

    let uri = Url::parse("file:///Main.java").unwrap();
    open_document(
        &backend,
        &uri,
        "java",
        "List x = new ArrayList<String>();",
    )
    .await;
    assert_eq!(
        backend.session_type_of(uri.as_str(), "x").as_deref(),
        Some("ArrayList")
    );

    // Re-open with a buffer that no longer declares `x`.
    open_document(&backend, &uri, "java", "int y = 5;").await;
    assert_eq!(
        backend.session_type_of(uri.as_str(), "x"),
        None,
        "sessions start empty; stale declarations must not survive a reopen"
    );
}
