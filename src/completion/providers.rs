//! Completion providers.
//!
//! Each provider is one suggestion source with the same contract: given
//! the relevant slice of context, return a list of [`Suggestion`]s. A
//! provider that has nothing to say returns an empty list, never an
//! error. The engine decides which providers apply to the active
//! language and in which order their results are merged.

use crate::catalog;
use crate::namespace::NamespaceNode;
use crate::types::{PrefixContext, Suggestion, SuggestionKind};

/// Keyword provider: static keywords plus import snippets, filtered by
/// prefix match on the label.
pub fn keyword_suggestions(
    keywords: &[&str],
    imports: &[(&str, &str)],
    token: &str,
) -> Vec<Suggestion> {
    let mut items: Vec<Suggestion> = keywords
        .iter()
        .filter(|k| k.starts_with(token))
        .map(|k| Suggestion::simple(*k, SuggestionKind::Keyword))
        .collect();

    items.extend(
        imports
            .iter()
            .filter(|(label, _)| label.starts_with(token))
            .map(|(label, insert)| Suggestion {
                label: label.to_string(),
                insert_text: insert.to_string(),
                kind: SuggestionKind::Import,
            }),
    );

    items
}

/// Namespace provider: descend the index along the qualifier path and
/// offer the children matching the current token.
pub fn namespace_suggestions(index: &NamespaceNode, context: &PrefixContext) -> Vec<Suggestion> {
    index
        .lookup(&context.qualifier_path, &context.current_token)
        .into_iter()
        .map(|name| Suggestion::simple(name, SuggestionKind::Namespace))
        .collect()
}

/// Instance-method provider: catalog methods of the active type, when
/// one was resolved from the declaration table.
pub fn method_suggestions(active_type: Option<&str>, token: &str) -> Vec<Suggestion> {
    match active_type {
        Some(type_name) => catalog::suggest(type_name, token),
        None => Vec::new(),
    }
}
