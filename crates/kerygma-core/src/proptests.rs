//! Property-based tests for label and JSON utilities.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::types::ContentTypeId;
    use crate::util::ids::normalize_label;
    use crate::util::json::{coerce_text, coerce_text_list};
    use proptest::prelude::*;
    use serde_json::Value;

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "\\PC{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(6, 64, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::hash_map("[a-z]{1,8}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn test_normalize_label_is_idempotent(s in "\\PC{0,24}") {
            let once = normalize_label(&s);
            prop_assert_eq!(normalize_label(&once), once);
        }

        #[test]
        fn test_from_label_ignores_case_and_separators(i in 0usize..30) {
            let t = ContentTypeId::ALL[i];
            let shouted = t.as_str().to_uppercase().replace('_', " ");
            prop_assert_eq!(ContentTypeId::from_label(&shouted), Some(t));
        }

        #[test]
        fn test_coerce_text_never_blank(value in json_value()) {
            if let Some(text) = coerce_text(&value) {
                prop_assert!(!text.trim().is_empty());
            }
        }

        #[test]
        fn test_coerce_text_list_never_has_blanks(value in json_value()) {
            if let Some(items) = coerce_text_list(&value) {
                prop_assert!(!items.is_empty());
                prop_assert!(items.iter().all(|s| !s.trim().is_empty()));
            }
        }
    }
}
