//! Error types for kerygma-core

use thiserror::Error;

/// Result type alias for kerygma-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kerygma-core.
///
/// Detection and normalization are total and never produce these; they come
/// from the fallible edges (parsing payload text, strict label parsing).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Payload text is not valid JSON
    #[error("Invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Label does not name a known content type
    #[error("Unknown content type: {label}")]
    UnknownContentType {
        /// The label as given by the caller
        label: String,
    },
}

impl Error {
    /// Creates an unknown content type error.
    pub fn unknown_type<S: Into<String>>(label: S) -> Self {
        Error::UnknownContentType {
            label: label.into(),
        }
    }
}
