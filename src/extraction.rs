//! Prefix extraction.
//!
//! Free functions that derive a [`PrefixContext`] (the partial token
//! being typed plus any dotted qualifier path before it) from raw
//! buffer text and a cursor position.
//!
//! All functions operate on a single line and have no failure cases:
//! out-of-range cursors are clamped, and the worst outcome is an
//! all-empty context.
//!
//! | Line up to cursor      | qualifier_path       | current_token |
//! |------------------------|----------------------|---------------|
//! | `impo`                 | (empty)              | `impo`        |
//! | `java.util.Ar`         | `java`, `util`       | `Ar`          |
//! | `list.`                | `list`               | (empty)       |
//! | `x = new Arr`          | (empty)              | `Arr`         |
//! | `foo.bar `             | (empty)              | (empty)       |

use crate::types::PrefixContext;

/// Derive the prefix context at `(cursor_line, cursor_column)` within
/// `source_text`.
///
/// A cursor line past the end of the buffer is clamped to the last line;
/// a column past the end of its line is clamped to the line length.
pub fn extract(source_text: &str, cursor_line: u32, cursor_column: u32) -> PrefixContext {
    let lines: Vec<&str> = source_text.lines().collect();
    if lines.is_empty() {
        return PrefixContext {
            current_token: String::new(),
            qualifier_path: Vec::new(),
            current_line: String::new(),
        };
    }

    let row = (cursor_line as usize).min(lines.len() - 1);
    let line = lines[row];
    let chars: Vec<char> = line.chars().collect();
    let col = (cursor_column as usize).min(chars.len());

    let up_to_cursor: String = chars[..col].iter().collect();
    let (qualifier_path, current_token) = split_fragment(&up_to_cursor);

    PrefixContext {
        current_token,
        qualifier_path,
        current_line: line.to_string(),
    }
}

/// Split the text before the cursor into a qualifier path and the token
/// being typed.
///
/// The last whitespace-delimited segment is the raw fragment; within it,
/// everything before the final `.` forms the path and the remainder is
/// the token. A fragment ending in `.` yields an empty token, and a
/// cursor sitting on whitespace yields an empty fragment entirely.
fn split_fragment(up_to_cursor: &str) -> (Vec<String>, String) {
    let fragment = up_to_cursor
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("");

    if fragment.is_empty() {
        return (Vec::new(), String::new());
    }

    let mut segments: Vec<&str> = fragment.split('.').collect();
    // `split` always yields at least one element.
    let token = segments.pop().unwrap_or("").to_string();
    let path = segments
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<String>>();
    (path, token)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(text: &str, line: u32, col: u32) -> PrefixContext {
        extract(text, line, col)
    }

    #[test]
    fn test_plain_token_no_path() {
        let c = ctx("impo", 0, 4);
        assert_eq!(c.current_token, "impo");
        assert!(c.qualifier_path.is_empty());
        assert_eq!(c.current_line, "impo");
    }

    #[test]
    fn test_dotted_path_split() {
        let c = ctx("import java.util.Ar", 0, 19);
        assert_eq!(c.qualifier_path, vec!["java", "util"]);
        assert_eq!(c.current_token, "Ar");
    }

    #[test]
    fn test_trailing_dot_yields_empty_token() {
        let c = ctx("list.", 0, 5);
        assert_eq!(c.qualifier_path, vec!["list"]);
        assert_eq!(c.current_token, "");
    }

    #[test]
    fn test_cursor_on_whitespace_yields_empty_fragment() {
        let c = ctx("foo.bar ", 0, 8);
        assert!(c.qualifier_path.is_empty());
        assert_eq!(c.current_token, "");
    }

    #[test]
    fn test_cursor_mid_line_only_sees_text_before_it() {
        // Cursor between `ja` and `va.util`
        let c = ctx("java.util", 0, 2);
        assert!(c.qualifier_path.is_empty());
        assert_eq!(c.current_token, "ja");
    }

    #[test]
    fn test_second_line() {
        let c = ctx("first line\nx.ad", 1, 4);
        assert_eq!(c.qualifier_path, vec!["x"]);
        assert_eq!(c.current_token, "ad");
        assert_eq!(c.current_line, "x.ad");
    }

    #[test]
    fn test_column_past_line_end_is_clamped() {
        let c = ctx("abc", 0, 99);
        assert_eq!(c.current_token, "abc");
    }

    #[test]
    fn test_line_past_buffer_end_is_clamped() {
        let c = ctx("abc\ndef", 42, 3);
        assert_eq!(c.current_line, "def");
        assert_eq!(c.current_token, "def");
    }

    #[test]
    fn test_empty_buffer() {
        let c = ctx("", 0, 0);
        assert_eq!(c.current_token, "");
        assert!(c.qualifier_path.is_empty());
        assert_eq!(c.current_line, "");
    }

    #[test]
    fn test_token_is_clean_suffix_for_all_cursor_positions() {
        let line = "  obj.method(java.util.Ar";
        for col in 0..=line.len() as u32 {
            let c = ctx(line, 0, col);
            let prefix: String = line.chars().take(col as usize).collect();
            assert!(
                prefix.ends_with(&c.current_token),
                "token {:?} not a suffix of {:?}",
                c.current_token,
                prefix
            );
            assert!(
                !c.current_token.contains(char::is_whitespace),
                "token {:?} contains whitespace",
                c.current_token
            );
            assert!(
                !c.current_token.contains('.'),
                "token {:?} contains a dot",
                c.current_token
            );
        }
    }
}
