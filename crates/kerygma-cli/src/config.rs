//! CLI configuration.
//!
//! The config file is TOML. Its location is, in order:
//!
//! 1. the `--config` argument
//! 2. the `KERYGMA_CONFIG` environment variable
//! 3. `<config dir>/kerygma/config.toml` (e.g. `~/.config/kerygma/config.toml`)
//!
//! A missing file is not an error; every field has a default.
//!
//! ```toml
//! log_level = "info"
//! pretty = false
//! default_type = "post"
//! strict = false
//! preview_chars = 160
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "KERYGMA_CONFIG";

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "KERYGMA_LOG";

/// Settings read from the config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KerygmaConfig {
    /// Log level used when `KERYGMA_LOG` is unset.
    pub log_level: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Declared type used when `--type` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_type: Option<String>,
    /// Exit with status 2 when `resolve` lands on the default view.
    pub strict: bool,
    /// Maximum length of export previews.
    pub preview_chars: usize,
}

impl Default for KerygmaConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            pretty: false,
            default_type: None,
            strict: false,
            preview_chars: 160,
        }
    }
}

impl KerygmaConfig {
    /// The platform default config path, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kerygma").join("config.toml"))
    }

    /// The config path in effect for an optional `--config` argument.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        resolve_path_with(explicit, std::env::var(CONFIG_ENV).ok())
    }

    /// Load the config in effect, falling back to defaults when absent.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load a specific file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn resolve_path_with(explicit: Option<&str>, env: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = env.filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    KerygmaConfig::default_config_path()
}
