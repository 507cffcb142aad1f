//! Data types used throughout the polyglot_lsp server.
//!
//! This module contains the "model" structs and enums shared by the
//! completion engine (requests, suggestions, prefix context) and the
//! remote-execution boundary (the `Language` enum).

/// The category of a completion suggestion.
///
/// Deduplication identity is `(label, kind)`: two suggestions with the
/// same label but different kinds are distinct items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    /// A language keyword (`if`, `while`, `class`, …).
    Keyword,
    /// A package/namespace segment or a class reachable through one
    /// (`util` in `java.util`, `ArrayList` in `java.util.ArrayList`).
    Namespace,
    /// An instance method of a tracked variable's inferred type.
    Method,
    /// A ready-made import statement snippet.
    Import,
}

impl SuggestionKind {
    /// Short lowercase tag shown in the item detail, matching what the
    /// editor widget displays next to each suggestion.
    pub fn tag(self) -> &'static str {
        match self {
            SuggestionKind::Keyword => "keyword",
            SuggestionKind::Namespace => "package",
            SuggestionKind::Method => "method",
            SuggestionKind::Import => "import",
        }
    }
}

/// One suggestion surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Display text (e.g. `import java.util.*`).
    pub label: String,
    /// Text inserted on acceptance (e.g. `import java.util.*;`).
    pub insert_text: String,
    /// The category of the suggestion.
    pub kind: SuggestionKind,
}

impl Suggestion {
    /// Construct a suggestion whose label and insert text are the same,
    /// which is the common case for keywords, namespaces, and methods.
    pub fn simple(text: impl Into<String>, kind: SuggestionKind) -> Self {
        let text = text.into();
        Suggestion {
            insert_text: text.clone(),
            label: text,
            kind,
        }
    }
}

/// A completion request as supplied by the editor widget.
///
/// Constructed fresh per request; never stored.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    /// Full buffer text.
    pub source_text: &'a str,
    /// Zero-based row of the cursor.
    pub cursor_line: u32,
    /// Zero-based column of the cursor.
    pub cursor_column: u32,
    /// Editor language id (e.g. "java", "python").
    pub language_id: &'a str,
}

/// What the user is typing at the cursor, derived from one line of text.
///
/// For the line fragment `java.util.Ar` the context is
/// `qualifier_path = ["java", "util"]`, `current_token = "Ar"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixContext {
    /// The partial identifier being typed. Never contains whitespace
    /// or `.`.
    pub current_token: String,
    /// The dotted segments preceding `current_token`, in order.
    /// Empty when the fragment has no `.`.
    pub qualifier_path: Vec<String>,
    /// Raw text of the cursor's line (the whole line, not just up to
    /// the cursor).
    pub current_line: String,
}

/// A language accepted by the remote execution service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    JavaScript,
    C,
    Cpp,
    Java,
}

impl Language {
    /// The wire name used in run-endpoint payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }

    /// Parse an editor language id. Unknown ids return `None`; the
    /// completion path keeps those as plain strings, but the run
    /// boundary only accepts these five.
    pub fn from_id(id: &str) -> Option<Language> {
        match id {
            "python" => Some(Language::Python),
            "javascript" => Some(Language::JavaScript),
            "c" => Some(Language::C),
            "cpp" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            _ => None,
        }
    }
}
