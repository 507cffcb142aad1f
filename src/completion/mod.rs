/// Completion-related modules.
///
/// This sub-module groups all completion logic:
/// - **providers**: The individual suggestion sources (keywords,
///   namespace index, instance methods)
/// - **engine**: Orchestration: prefix extraction, session observation,
///   provider invocation, merge and deduplication
/// - **builder**: Building LSP `CompletionItem`s from engine suggestions
pub mod builder;
pub mod engine;
pub mod providers;
