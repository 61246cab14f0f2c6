//! Kerygma Core: shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Kerygma crates.
//! It has no internal Kerygma dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: The closed set of content types and their labels
//! - [`util`]: Label normalization and JSON coercion helpers

#![doc = include_str!("../README.md")]

pub mod error;
pub mod types;
pub mod util;

mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use types::ContentTypeId;

// Convenience re-exports from util
pub use util::ids::{humanize_key, normalize_label};
pub use util::json::{coerce_text, coerce_text_list, record_root};
