//! Exporter configuration
//!
//! Handles parsing of the optional `.hugo-wxr.toml` file found in the content
//! directory and environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration filename, looked up in the content directory
pub const CONFIG_FILENAME: &str = ".hugo-wxr.toml";

/// Default author written to `dc:creator`
pub const DEFAULT_CREATOR: &str = "admin";

/// Default prefix for item GUIDs
pub const DEFAULT_GUID_BASE: &str = "http://example.com/";

/// Environment variable for the item creator
pub const ENV_CREATOR: &str = "HUGO_WXR_CREATOR";

/// Environment variable for the GUID base URL
pub const ENV_GUID_BASE: &str = "HUGO_WXR_GUID";

/// Error loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Config parse error: {0}")]
    ParseError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings the WXR exporter needs beyond the content itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WxrConfig {
    /// Author login for every item
    #[serde(default = "default_creator")]
    pub creator: String,

    /// Prefix prepended to every GUID digest
    #[serde(default = "default_guid_base")]
    pub guid_base: String,
}

fn default_creator() -> String {
    DEFAULT_CREATOR.to_string()
}

fn default_guid_base() -> String {
    DEFAULT_GUID_BASE.to_string()
}

impl Default for WxrConfig {
    fn default() -> Self {
        Self {
            creator: default_creator(),
            guid_base: default_guid_base(),
        }
    }
}

impl WxrConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn with_guid_base(mut self, guid_base: impl Into<String>) -> Self {
        self.guid_base = guid_base.into();
        self
    }

    /// Load configuration for a content directory
    ///
    /// Reads `.hugo-wxr.toml` from the content directory when present, falls
    /// back to defaults otherwise, then applies environment overrides.
    pub fn load(content_dir: &Path) -> ConfigResult<Self> {
        Self::load_with(content_dir, |name| std::env::var(name).ok())
    }

    /// Load configuration for a content directory with an explicit override lookup
    pub fn load_with<F>(content_dir: &Path, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = content_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.is_file() {
            let content = std::fs::read_to_string(&config_path).map_err(|e| {
                ConfigError::IoError(format!(
                    "Failed to read config {}: {}",
                    config_path.display(),
                    e
                ))
            })?;
            tracing::debug!("Loaded configuration from {}", config_path.display());
            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_overrides(lookup);

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> ConfigResult<Self> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse config: {}", e)))
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(creator) = lookup(ENV_CREATOR) {
            self.creator = creator;
        }

        if let Some(guid_base) = lookup(ENV_GUID_BASE) {
            self.guid_base = guid_base;
        }
    }
}
