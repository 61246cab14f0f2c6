//! # kerygma-cli
//!
//! Command-line tools for inspecting generated content:
//! - Detecting a payload's content type and why
//! - Resolving payloads to their canonical record and renderer
//! - Exporting records as plain text or card previews
//! - Managing the CLI config file

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod error;

pub use config::KerygmaConfig;
pub use error::{Error, Result};
