use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NotectlError, Result};

/// Centralized configuration for the notectl service
///
/// Loaded from `~/.notectl/config.toml`. Every field has a working default
/// so a missing config file is not an error; CLI flags and environment
/// variables override whatever is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotectlConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address the HTTP listener binds to
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SQLite connection URL
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Default log filter when RUST_LOG is unset
    pub level: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3030".to_string(),
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".notectl");
        Self {
            url: format!("sqlite://{}", dir.join("notectl.db").display()),
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for NotectlConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            database: DatabaseSection::default(),
            log: LogSection::default(),
        }
    }
}

impl NotectlConfig {
    /// Load config from ~/.notectl/config.toml, falling back to defaults
    /// if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path (used by tests).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|source| {
            NotectlError::ConfigParse {
                path: path.to_owned(),
                source,
            }
        })?;

        Ok(config)
    }

    /// Get config file path: ~/.notectl/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".notectl/config.toml")
    }
}
