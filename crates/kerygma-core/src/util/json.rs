//! Total coercions over untyped JSON payloads.
//!
//! Generated payloads disagree with themselves: a field that is a list in one
//! prompt version is a bare string in the next, a caption may arrive wrapped in
//! an object, and numbers show up where text is expected. Every function here
//! accepts any [`Value`] and returns a usable result; none of them fail.
//!
//! Recursive walks stop at [`MAX_DEPTH`]. Generator output cannot cycle, but
//! deeply nested garbage must not cost more than a bounded amount of work.
//!
//! # Example
//!
//! ```rust
//! use kerygma_core::util::json::{coerce_text, coerce_text_list};
//! use serde_json::json;
//!
//! assert_eq!(coerce_text(&json!({"texto": "Graça"})), Some("Graça".to_string()));
//! assert_eq!(coerce_text_list(&json!("#fe")), Some(vec!["#fe".to_string()]));
//! assert_eq!(coerce_text(&json!({"cor": "azul"})), None);
//! ```

use std::sync::LazyLock;

use serde_json::{Map, Value};

/// Maximum nesting depth visited by any recursive walk.
pub const MAX_DEPTH: usize = 8;

/// Keys probed, in order, when an object stands where text is expected.
pub const REPRESENTATIVE_KEYS: &[&str] = &[
    "texto",
    "text",
    "conteudo",
    "content",
    "titulo",
    "title",
    "mensagem",
    "descricao",
    "valor",
    "value",
    "nome",
    "name",
];

static EMPTY_RECORD: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

/// The object that carries a payload's fields.
///
/// Arrays are treated as "the real record is element 0". Anything that is not
/// an object after that step yields an empty object.
pub fn record_root(raw: &Value) -> &Map<String, Value> {
    let candidate = match raw {
        Value::Array(items) => items.first(),
        other => Some(other),
    };
    match candidate {
        Some(Value::Object(map)) => map,
        _ => &EMPTY_RECORD,
    }
}

/// Look up a key or a dotted path (`conteudo.legenda`) in an object.
///
/// An exact key match is preferred over path traversal, so keys that
/// themselves contain dots still resolve.
pub fn lookup<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(path) {
        return Some(value);
    }
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = map.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Whether a key (or dotted path) exists with a non-null value.
pub fn has_key(map: &Map<String, Value>, path: &str) -> bool {
    lookup(map, path).is_some_and(|v| !v.is_null())
}

/// Coerce any value to non-blank text.
///
/// - strings are returned verbatim unless blank
/// - numbers and booleans are stringified
/// - arrays join their coercible items with newlines
/// - objects yield their most representative text field
///
/// Returns `None` when nothing meaningful is found.
pub fn coerce_text(value: &Value) -> Option<String> {
    coerce_text_at(value, 0)
}

fn coerce_text_at(value: &Value, depth: usize) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Value::Array(items) => {
            if depth >= MAX_DEPTH {
                return None;
            }
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| coerce_text_at(item, depth + 1))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("\n"))
            }
        }
        Value::Object(map) => representative_text_at(map, depth),
    }
}

/// The most representative text of an object, probing [`REPRESENTATIVE_KEYS`].
pub fn representative_text(map: &Map<String, Value>) -> Option<String> {
    representative_text_at(map, 0)
}

fn representative_text_at(map: &Map<String, Value>, depth: usize) -> Option<String> {
    if depth >= MAX_DEPTH {
        return None;
    }
    REPRESENTATIVE_KEYS
        .iter()
        .find_map(|key| map.get(*key).and_then(|v| coerce_text_at(v, depth + 1)))
}

/// Coerce any value to a non-empty list of non-blank strings.
///
/// A scalar becomes a single-element list; arrays keep their coercible items
/// in order and drop the rest.
pub fn coerce_text_list(value: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| coerce_text_at(item, 1))
            .collect(),
        other => coerce_text(other).into_iter().collect(),
    };
    if items.is_empty() { None } else { Some(items) }
}

/// Collect every text leaf under a value, newline-joined, up to `max_depth`.
///
/// Object keys are not emitted; only string, number, and boolean leaves are.
pub fn flatten_text(value: &Value, max_depth: usize) -> String {
    let mut parts = Vec::new();
    collect_leaves(value, 0, max_depth.min(MAX_DEPTH), &mut parts);
    parts.join("\n")
}

fn collect_leaves(value: &Value, depth: usize, max_depth: usize, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            if let Some(text) = coerce_text_at(value, depth) {
                out.push(text);
            }
        }
        Value::Array(items) => {
            if depth < max_depth {
                for item in items {
                    collect_leaves(item, depth + 1, max_depth, out);
                }
            }
        }
        Value::Object(map) => {
            if depth < max_depth {
                for item in map.values() {
                    collect_leaves(item, depth + 1, max_depth, out);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    // ------------------------------------------------------------------------
    // record_root tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_record_root_object() {
        let raw = json!({"titulo": "A"});
        assert_eq!(record_root(&raw).get("titulo"), Some(&json!("A")));
    }

    #[test]
    fn test_record_root_array_uses_first_element() {
        let raw = json!([{"titulo": "primeiro"}, {"titulo": "segundo"}]);
        assert_eq!(record_root(&raw).get("titulo"), Some(&json!("primeiro")));
    }

    #[test]
    fn test_record_root_primitives_are_empty() {
        assert!(record_root(&json!(null)).is_empty());
        assert!(record_root(&json!("texto solto")).is_empty());
        assert!(record_root(&json!(42)).is_empty());
        assert!(record_root(&json!([])).is_empty());
        assert!(record_root(&json!(["a"])).is_empty());
    }

    // ------------------------------------------------------------------------
    // lookup tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_lookup_dotted_path() {
        let raw = json!({"conteudo": {"legenda": "Olá"}});
        let map = record_root(&raw);
        assert_eq!(lookup(map, "conteudo.legenda"), Some(&json!("Olá")));
        assert_eq!(lookup(map, "conteudo.hashtags"), None);
        assert_eq!(lookup(map, "conteudo.legenda.x"), None);
    }

    #[test]
    fn test_lookup_prefers_literal_key_with_dot() {
        let raw = json!({"a.b": 1, "a": {"b": 2}});
        assert_eq!(lookup(record_root(&raw), "a.b"), Some(&json!(1)));
    }

    #[test]
    fn test_has_key_ignores_null() {
        let raw = json!({"slides": null, "cta": ""});
        let map = record_root(&raw);
        assert!(!has_key(map, "slides"));
        assert!(has_key(map, "cta"));
        assert!(!has_key(map, "legenda"));
    }

    // ------------------------------------------------------------------------
    // coerce_text tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_coerce_text_scalars() {
        assert_eq!(coerce_text(&json!("Fé")), Some("Fé".to_string()));
        assert_eq!(coerce_text(&json!(7)), Some("7".to_string()));
        assert_eq!(coerce_text(&json!(true)), Some("true".to_string()));
        assert_eq!(coerce_text(&json!(null)), None);
        assert_eq!(coerce_text(&json!("   ")), None);
    }

    #[test]
    fn test_coerce_text_keeps_whitespace_verbatim() {
        assert_eq!(coerce_text(&json!("  Amém ")), Some("  Amém ".to_string()));
    }

    #[test]
    fn test_coerce_text_array_joins() {
        let value = json!(["Primeiro", "", {"texto": "Segundo"}, null]);
        assert_eq!(coerce_text(&value), Some("Primeiro\nSegundo".to_string()));
    }

    #[test]
    fn test_coerce_text_object_representative_order() {
        let value = json!({"titulo": "T", "texto": "corpo"});
        assert_eq!(coerce_text(&value), Some("corpo".to_string()));
    }

    #[test]
    fn test_coerce_text_object_without_text_is_none() {
        assert_eq!(coerce_text(&json!({"cor": "azul", "largura": 3})), None);
        assert_eq!(coerce_text(&json!({})), None);
    }

    #[test]
    fn test_coerce_text_depth_cap() {
        let mut value = json!("fundo");
        for _ in 0..(MAX_DEPTH + 4) {
            value = json!({ "texto": value });
        }
        assert_eq!(coerce_text(&value), None);

        let mut shallow = json!("raso");
        for _ in 0..3 {
            shallow = json!({ "texto": shallow });
        }
        assert_eq!(coerce_text(&shallow), Some("raso".to_string()));
    }

    // ------------------------------------------------------------------------
    // coerce_text_list tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_coerce_text_list_wraps_scalar() {
        assert_eq!(coerce_text_list(&json!("#fe")), Some(vec!["#fe".to_string()]));
    }

    #[test]
    fn test_coerce_text_list_drops_blanks() {
        let value = json!(["#fe", "", "  ", null, 3]);
        assert_eq!(
            coerce_text_list(&value),
            Some(vec!["#fe".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn test_coerce_text_list_empty_is_none() {
        assert_eq!(coerce_text_list(&json!([])), None);
        assert_eq!(coerce_text_list(&json!(null)), None);
        assert_eq!(coerce_text_list(&json!([null, ""])), None);
    }

    // ------------------------------------------------------------------------
    // flatten_text tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_flatten_text_walks_in_order() {
        let value = json!({"a": "um", "b": ["dois", {"c": 3}], "d": null});
        assert_eq!(flatten_text(&value, MAX_DEPTH), "um\ndois\n3");
    }

    #[test]
    fn test_flatten_text_respects_depth() {
        let value = json!({"a": {"b": {"c": "fundo"}}, "d": "raso"});
        assert_eq!(flatten_text(&value, 1), "raso");
    }
}
