//! Configuration
//!
//! Settings for reaching the question-answering service. Values come from
//! built-in defaults, optionally overridden by a TOML file:
//!
//! ```toml
//! base_url = "http://localhost:8000"
//! request_timeout_secs = 120
//! health_timeout_secs = 5
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Base URL is not an http(s) URL
    #[error("invalid base URL {0:?}: expected http:// or https://")]
    InvalidBaseUrl(String),
}

/// Conductor configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConductorConfig {
    /// Service base URL, without trailing slash
    pub base_url: String,
    /// Transport timeout for queries in seconds (0 = none)
    pub request_timeout_secs: u64,
    /// Timeout for the startup health probe in seconds
    pub health_timeout_secs: u64,
}

impl Default for ConductorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 120,
            health_timeout_secs: 5,
        }
    }
}

impl ConductorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validated()
    }

    /// Replace the base URL, validating it
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.base_url = base_url.into();
        self.validated()
    }

    /// Check the base URL and normalize its trailing slash
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }
}

/// Default config file location (`<config dir>/mailchat/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mailchat").join("config.toml"))
}

/// Load configuration from a specific file
pub fn load_config_from_path(path: &Path) -> Result<ConductorConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ConductorConfig::from_toml_str(&content)
}

/// Load configuration from the default path, falling back to defaults
/// when no file exists there
pub fn load_config() -> Result<ConductorConfig, ConfigError> {
    match default_config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Ok(ConductorConfig::default()),
    }
}
