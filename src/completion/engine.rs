//! Completion engine.
//!
//! Orchestrates one completion request: extract the prefix context,
//! let the session observe the current line, invoke the providers that
//! apply to the active language, and merge the results in fixed
//! priority order with `(label, kind)` deduplication.
//!
//! The engine holds only immutable state (the namespace index and the
//! configuration-derived keyword tables) and is shared read-only by all
//! sessions; the mutable per-document state comes in as an explicit
//! [`LanguageSession`].

use crate::config::Config;
use crate::extraction;
use crate::keywords::JAVA_IMPORTS;
use crate::namespace::{NamespaceNode, java_namespace_index};
use crate::session::LanguageSession;
use crate::completion::providers;
use crate::types::{CompletionRequest, Suggestion, SuggestionKind};

/// The shared, read-only half of the completion machinery.
pub struct CompletionEngine {
    index: NamespaceNode,
    config: Config,
}

impl CompletionEngine {
    /// Build the engine once; the namespace index and keyword tables
    /// are immutable afterwards.
    pub fn new(config: Config) -> Self {
        CompletionEngine {
            index: java_namespace_index(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a language gets the rich provider set (namespace index,
    /// declaration tracking, method catalog) on top of its keywords.
    fn has_rich_providers(language_id: &str) -> bool {
        language_id == "java"
    }

    /// Produce the ordered, deduplicated suggestion list for one
    /// request. Always returns a (possibly empty) list; malformed or
    /// partial input degrades to fewer suggestions, never an error.
    pub fn complete(
        &self,
        request: &CompletionRequest<'_>,
        session: &mut LanguageSession,
    ) -> Vec<Suggestion> {
        let context = extraction::extract(
            request.source_text,
            request.cursor_line,
            request.cursor_column,
        );

        // Baseline languages delegate entirely to their static keyword
        // list; the widget filters as the user types.
        if !Self::has_rich_providers(request.language_id) {
            return self
                .config
                .keywords_for(request.language_id)
                .into_iter()
                .map(|k| Suggestion::simple(k, SuggestionKind::Keyword))
                .collect();
        }

        session.observe(&context.current_line);

        // The word before the last dot names the completion subject; if
        // the declaration table knows it, its type drives the method
        // provider.
        let active_type = match context.qualifier_path.last() {
            Some(variable) => session.type_of(variable),
            None => None,
        };

        let mut merged: Vec<Suggestion> = Vec::new();
        push_unique(
            &mut merged,
            providers::keyword_suggestions(
                &self.config.keywords_for(request.language_id),
                JAVA_IMPORTS,
                &context.current_token,
            ),
        );
        push_unique(
            &mut merged,
            providers::namespace_suggestions(&self.index, &context),
        );
        push_unique(
            &mut merged,
            providers::method_suggestions(active_type, &context.current_token),
        );

        merged
    }
}

/// Append suggestions, skipping any whose `(label, kind)` duplicates an
/// item already present. Order of first appearance is preserved.
fn push_unique(items: &mut Vec<Suggestion>, incoming: Vec<Suggestion>) {
    for item in incoming {
        if !items
            .iter()
            .any(|existing| existing.label == item.label && existing.kind == item.kind)
        {
            items.push(item);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
