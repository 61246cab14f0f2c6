//! Properties that must hold for every content type in the catalog.

use kerygma_content::aliases::{Scope, fields_of};
use kerygma_content::view::renderer_for;
use kerygma_content::{ContentTypeId, RendererId, detect, normalize, resolve};
use serde_json::{Value, json};

/// A payload filling every canonical field of a type with its own name.
fn populated(t: ContentTypeId) -> Value {
    let mut map = serde_json::Map::new();
    for field in fields_of(Scope::Type(t)) {
        map.insert(field.field.to_string(), json!(format!("{} de teste", field.field)));
    }
    Value::Object(map)
}

#[test]
fn test_every_type_has_fields_and_a_renderer() {
    for t in ContentTypeId::ALL {
        assert!(!fields_of(Scope::Type(t)).is_empty(), "{t}");
        assert_ne!(renderer_for(t, None), RendererId::DefaultView, "{t}");
    }
}

#[test]
fn test_populated_records_are_not_empty() {
    for t in ContentTypeId::ALL {
        let record = normalize(&populated(t), t);
        assert!(!record.empty, "{t}");
        assert_eq!(record.content_type(), t);
    }
}

#[test]
fn test_normalize_is_idempotent_per_type() {
    for t in ContentTypeId::ALL {
        let once = normalize(&populated(t), t);
        let twice = normalize(&once.to_value(), t);
        assert_eq!(once, twice, "{t}");
    }
}

#[test]
fn test_declared_type_with_its_own_fields_is_kept() {
    for t in ContentTypeId::ALL {
        let resolution = resolve(&populated(t), Some(t.as_str()));
        assert_eq!(resolution.content_type, t, "{t}");
        assert!(!resolution.record.empty, "{t}");
    }
}

#[test]
fn test_serialized_records_detect_back() {
    for t in ContentTypeId::ALL {
        let value = normalize(&populated(t), t).to_value();
        assert_eq!(detect(&value, None), t, "{t}");
    }
}
