//! Completion item building.
//!
//! Maps engine [`Suggestion`]s to the LSP `CompletionItem`s handed back
//! to the editor widget. The widget owns rendering and selection; we
//! only supply label, kind, detail tag, and insert text.

use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind};

use crate::types::{Suggestion, SuggestionKind};

fn item_kind(kind: SuggestionKind) -> CompletionItemKind {
    match kind {
        SuggestionKind::Keyword => CompletionItemKind::KEYWORD,
        SuggestionKind::Namespace => CompletionItemKind::MODULE,
        SuggestionKind::Method => CompletionItemKind::METHOD,
        SuggestionKind::Import => CompletionItemKind::SNIPPET,
    }
}

/// Convert one suggestion into an LSP completion item.
pub fn to_completion_item(suggestion: &Suggestion) -> CompletionItem {
    CompletionItem {
        label: suggestion.label.clone(),
        kind: Some(item_kind(suggestion.kind)),
        detail: Some(suggestion.kind.tag().to_string()),
        insert_text: Some(suggestion.insert_text.clone()),
        ..CompletionItem::default()
    }
}

/// Convert an engine result wholesale, preserving order.
pub fn to_completion_items(suggestions: &[Suggestion]) -> Vec<CompletionItem> {
    suggestions.iter().map(to_completion_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_carries_label_kind_and_insert_text() {
        let suggestion = Suggestion {
            label: "import java.util.*".to_string(),
            insert_text: "import java.util.*;".to_string(),
            kind: SuggestionKind::Import,
        };
        let item = to_completion_item(&suggestion);
        assert_eq!(item.label, "import java.util.*");
        assert_eq!(item.kind, Some(CompletionItemKind::SNIPPET));
        assert_eq!(item.detail.as_deref(), Some("import"));
        assert_eq!(item.insert_text.as_deref(), Some("import java.util.*;"));
    }

    #[test]
    fn test_kind_mapping() {
        for (kind, expected) in [
            (SuggestionKind::Keyword, CompletionItemKind::KEYWORD),
            (SuggestionKind::Namespace, CompletionItemKind::MODULE),
            (SuggestionKind::Method, CompletionItemKind::METHOD),
            (SuggestionKind::Import, CompletionItemKind::SNIPPET),
        ] {
            let item = to_completion_item(&Suggestion::simple("x", kind));
            assert_eq!(item.kind, Some(expected));
        }
    }
}
