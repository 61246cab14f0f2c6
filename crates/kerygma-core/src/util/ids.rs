//! Label normalization utilities.
//!
//! Type labels arrive from many places (stored `content_type` columns, prompt
//! versions, hand-edited payloads) and disagree on case, separators, and
//! accents. [`normalize_label`] collapses them to one lookup key;
//! [`humanize_key`] goes the other way for display headings.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a type label to a compact lookup key.
///
/// Performs the following transformations:
/// 1. Decomposes to NFKD, so accented and full-width forms fold to their base
/// 2. Drops combining marks (`ç` → `c`, `ã` → `a`)
/// 3. Converts to lowercase
/// 4. Drops every character that is not a letter or digit
///
/// # Examples
///
/// ```
/// use kerygma_core::util::ids::normalize_label;
///
/// assert_eq!(normalize_label("Roteiro_Video"), "roteirovideo");
/// assert_eq!(normalize_label("roteiro video"), "roteirovideo");
/// assert_eq!(normalize_label("roteiroReels"), "roteiroreels");
/// assert_eq!(normalize_label("Oração"), "oracao");
/// ```
pub fn normalize_label(label: &str) -> String {
    label
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Turn a snake_case key into a display heading.
///
/// # Examples
///
/// ```
/// use kerygma_core::util::ids::humanize_key;
///
/// assert_eq!(humanize_key("pontos_principais"), "Pontos principais");
/// assert_eq!(humanize_key("cta"), "Cta");
/// assert_eq!(humanize_key("  "), "");
/// ```
pub fn humanize_key(key: &str) -> String {
    let words: Vec<&str> = key
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();
    let joined = words.join(" ");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
