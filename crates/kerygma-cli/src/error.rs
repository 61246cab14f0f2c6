//! Error types for kerygma-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for kerygma-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kerygma-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from kerygma-core
    #[error("Core error: {0}")]
    Core(#[from] kerygma_core::Error),

    /// I/O error on a specific file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// I/O error on stdin or stdout
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    /// Configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file is not valid TOML for the config struct
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be written as TOML
    #[error("Could not serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Output could not be written as JSON
    #[error("Could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_io_with_path_display() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            "/tmp/payload.json",
        );
        assert_eq!(err.to_string(), "I/O error on /tmp/payload.json: missing");
    }

    #[test]
    fn test_core_error_from() {
        let core = kerygma_core::Error::unknown_type("newsletter");
        let err: Error = core.into();
        assert!(err.to_string().contains("Unknown content type: newsletter"));
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            Error::config("no config dir").to_string(),
            "Configuration error: no config dir"
        );
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
