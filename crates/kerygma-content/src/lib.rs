//! Kerygma Content: type detection, normalization, and view resolution.
//!
//! Generated payloads arrive as loosely shaped JSON. This crate turns any of
//! them into a canonical, fully populated record plus the renderer that
//! should display it.
//!
//! # Modules
//!
//! - [`aliases`]: Source-key aliases for every canonical field
//! - [`detect`]: Content type detection from labels, tags, and structure
//! - [`normalize`]: Canonical records per content type
//! - [`view`]: Renderer bindings and the `resolve` entry point
//! - [`export`]: Plain-text export and previews

#![doc = include_str!("../README.md")]

pub mod aliases;
pub mod detect;
pub mod export;
pub mod normalize;
pub mod view;

mod proptests;

// Re-export the entry points at crate root
pub use detect::{Detection, DetectionSource, detect, detect_with_source};
pub use normalize::{CanonicalContent, CanonicalRecord, normalize};
pub use view::{RendererId, Resolution, resolve, resolve_str};

// Re-export core types for convenience
pub use kerygma_core::{ContentTypeId, Error, Result};
