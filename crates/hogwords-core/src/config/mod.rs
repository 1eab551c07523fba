mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::HogwordsError;
use defaults::*;

/// Top-level Hogwords configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hogwords: HogwordsConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HogwordsConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for HogwordsConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Where the persisted session record lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON file holding the `token` and `user` keys.
    #[serde(default = "default_session_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

/// Backend text translation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Language the backend delivers its strings in.
    #[serde(default = "default_source_language")]
    pub source_language: String,
    /// The one additional language the translation map covers.
    #[serde(default = "default_target_language")]
    pub target_language: String,
    /// Active UI language when none is given on the command line.
    #[serde(default = "default_source_language")]
    pub default_language: String,
    /// Optional TOML file with extra translation entries. Empty = none.
    #[serde(default)]
    pub overlay: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            default_language: default_source_language(),
            overlay: String::new(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, HogwordsError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| HogwordsError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    parse(&content)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, HogwordsError> {
    toml::from_str(content)
        .map_err(|e| HogwordsError::Config(format!("failed to parse config: {}", e)))
}
