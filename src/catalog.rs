//! Static method catalog.
//!
//! Maps a type name to the instance methods it exposes. Paired with the
//! declaration tracker, this is what turns `List x = new ArrayList<…>(`
//! followed by `x.` into method suggestions.

use crate::types::{Suggestion, SuggestionKind};

/// Known types and their instance methods, in presentation order.
/// Add more classes and their methods here.
const METHOD_CATALOG: &[(&str, &[&str])] = &[
    ("ArrayList", &["add", "remove", "size", "get"]),
    ("HashSet", &["add", "remove", "contains"]),
    ("HashMap", &["put", "get", "remove", "containsKey"]),
];

/// Look up the method list for a type. Unknown types return `None`.
pub fn methods_of(type_name: &str) -> Option<&'static [&'static str]> {
    METHOD_CATALOG
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, methods)| *methods)
}

/// Build method suggestions for `type_name`, filtered by prefix match
/// on the method name, in catalog order. Unknown types contribute
/// nothing.
pub fn suggest(type_name: &str, prefix: &str) -> Vec<Suggestion> {
    let Some(methods) = methods_of(type_name) else {
        return Vec::new();
    };

    methods
        .iter()
        .filter(|m| m.starts_with(prefix))
        .map(|m| Suggestion::simple(*m, SuggestionKind::Method))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_type_in_catalog_order() {
        let items = suggest("ArrayList", "");
        let labels: Vec<&str> = items.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["add", "remove", "size", "get"]);
    }

    #[test]
    fn test_prefix_filter() {
        let items = suggest("HashMap", "co");
        let labels: Vec<&str> = items.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["containsKey"]);
    }

    #[test]
    fn test_unknown_type_is_empty() {
        assert!(suggest("TreeMap", "").is_empty());
    }

    #[test]
    fn test_no_duplicate_methods_per_entry() {
        for (name, methods) in METHOD_CATALOG {
            let mut seen = std::collections::HashSet::new();
            for m in *methods {
                assert!(seen.insert(m), "duplicate method {:?} for {:?}", m, name);
            }
        }
    }
}
