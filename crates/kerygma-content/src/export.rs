//! Plain-text export and library card previews.
//!
//! Rendering walks the record's serialized form, so field order follows the
//! record and new fields export without changes here.

use serde_json::{Map, Value};

use kerygma_core::humanize_key;

use crate::normalize::CanonicalRecord;

/// Fields tried, in order, for a record's display title.
pub const TITLE_FIELDS: &[&str] = &["titulo", "assunto", "evento", "resumo_pregacao", "mensagem"];

const SKIPPED: &[&str] = &["tipo", "_empty"];

/// Render a record as plain text, one headed block per non-blank field.
pub fn to_plain_text(record: &CanonicalRecord) -> String {
    field_bodies(record)
        .into_iter()
        .map(|(key, body)| format!("{}\n{body}", humanize_key(&key)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The record's display title, if any title-like field is filled.
pub fn title(record: &CanonicalRecord) -> Option<String> {
    title_field(&record.to_value()).map(|(_, text)| text)
}

/// A single-line preview of at most `max_chars` characters.
///
/// The title field is left out; whitespace runs collapse to one space.
/// Truncated previews end with `…`, counted within `max_chars`.
pub fn preview(record: &CanonicalRecord, max_chars: usize) -> String {
    let value = record.to_value();
    let title_key = title_field(&value).map(|(key, _)| key);

    let joined = field_bodies(record)
        .into_iter()
        .filter(|(key, _)| Some(key.as_str()) != title_key)
        .map(|(_, body)| body)
        .collect::<Vec<_>>()
        .join(" ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");

    truncate(&collapsed, max_chars)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max_chars - 1).collect();
    format!("{}…", kept.trim_end())
}

fn title_field(value: &Value) -> Option<(&'static str, String)> {
    let map = value.as_object()?;
    TITLE_FIELDS.iter().find_map(|key| {
        map.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| (*key, s.to_string()))
    })
}

fn field_bodies(record: &CanonicalRecord) -> Vec<(String, String)> {
    let value = record.to_value();
    let Some(map) = value.as_object() else {
        return Vec::new();
    };
    map.iter()
        .filter(|(key, _)| !SKIPPED.contains(&key.as_str()))
        .filter_map(|(key, value)| render_field(key, value).map(|body| (key.clone(), body)))
        .collect()
}

fn render_field(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) if items.iter().all(Value::is_string) => {
            let texts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if key == "hashtags" {
                Some(texts.join(" "))
            } else {
                Some(
                    texts
                        .iter()
                        .map(|t| format!("- {t}"))
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            }
        }
        Value::Array(items) => {
            let lines: Vec<String> = items
                .iter()
                .filter_map(Value::as_object)
                .map(object_lines)
                .filter(|lines| !lines.is_empty())
                .enumerate()
                .map(|(i, lines)| format!("{}. {}", i + 1, lines.join("\n   ")))
                .collect();
            if lines.is_empty() { None } else { Some(lines.join("\n")) }
        }
        Value::Object(map) => {
            let lines = object_lines(map);
            if lines.is_empty() { None } else { Some(lines.join("\n")) }
        }
        _ => None,
    }
}

/// `Label: value` lines for the non-blank fields of a nested shape.
fn object_lines(map: &Map<String, Value>) -> Vec<String> {
    map.iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => non_blank(s)?,
                Value::Array(items) => {
                    let texts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                    if texts.is_empty() {
                        return None;
                    }
                    texts.join(", ")
                }
                _ => return None,
            };
            Some(format!("{}: {text}", humanize_key(key)))
        })
        .collect()
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
