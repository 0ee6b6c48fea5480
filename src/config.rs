//! YAML configuration file support for runefinder.
//!
//! Everything has a default, so a configuration file is optional. When one is
//! given it is parsed, validated, and then overridden by the environment.
//!
//! ## Example YAML configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "workstation"
//!
//! cache:
//!   ucd_path: "/srv/unicode/UnicodeData.txt"
//!   ucd_url: "https://www.unicode.org/Public/UNIDATA/UnicodeData.txt"
//!   timeout_secs: 30
//!
//! log_level: "warn"
//! ```
//!
//! ## Environment overrides
//!
//! | Variable | Field | Notes |
//! |----------|-------|-------|
//! | `UCD_PATH` | `cache.ucd_path` | empty value selects the default path |
//! | `RUNEFINDER_UCD_URL` | `cache.ucd_url` | |

use std::fs;
use std::path::{Path, PathBuf};

use cache::CacheConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the UCD file location.
pub const UCD_PATH_ENV: &str = "UCD_PATH";
/// Environment variable replacing the remote source URL.
pub const UCD_URL_ENV: &str = "RUNEFINDER_UCD_URL";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level runefinder configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RunefinderConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// UCD file location and remote source
    #[serde(default)]
    pub cache: CacheConfig,

    /// Default tracing filter for the binary; `RUST_LOG` wins over it.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl RunefinderConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: RunefinderConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `UCD_PATH` and `RUNEFINDER_UCD_URL` from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigLoadError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// A set but empty `UCD_PATH` clears any configured path so the default
    /// location is used.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(UCD_PATH_ENV) {
            self.cache.ucd_path = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        if let Some(url) = lookup(UCD_URL_ENV) {
            self.cache.ucd_url = url;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        let url = self.cache.ucd_url.as_str();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigLoadError::Validation(format!(
                "cache.ucd_url must be an http(s) URL, got {url:?}"
            )));
        }

        if self.cache.timeout_secs == 0 {
            return Err(ConfigLoadError::Validation(
                "cache.timeout_secs must be > 0".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigLoadError::Validation(format!(
                "log_level must be one of {LOG_LEVELS:?}, got {:?}",
                self.log_level
            )));
        }

        Ok(())
    }
}

impl Default for RunefinderConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: None,
            cache: CacheConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}
