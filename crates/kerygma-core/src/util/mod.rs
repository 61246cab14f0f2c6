//! Utility modules for label normalization and JSON value coercion.
//!
//! # Modules
//!
//! - [`ids`]: Type label normalization
//! - [`json`]: Total coercions over untyped JSON payloads

pub mod ids;
pub mod json;
