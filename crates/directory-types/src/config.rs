//! Configuration loading for the directory engine.
//!
//! Layered precedence: built-in defaults -> config file
//! (~/.config/agent-directory/config.toml) -> environment variables
//! (AGENT_DIRECTORY_*). The embedding application applies anything above
//! that (e.g. per-deployment overrides) after `load` returns.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::DirectoryError;

/// Search-side tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Result limit applied when a caller passes none (or zero).
    #[serde(default = "default_search_limit")]
    pub default_limit: usize,

    /// Hard cap on any requested limit.
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_search_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    100
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: default_search_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl SearchSettings {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_limit == 0 {
            return Err("search.default_limit must be > 0".to_string());
        }
        if self.max_limit == 0 {
            return Err("search.max_limit must be > 0".to_string());
        }
        if self.default_limit > self.max_limit {
            return Err(format!(
                "search.default_limit ({}) must not exceed search.max_limit ({})",
                self.default_limit, self.max_limit
            ));
        }
        Ok(())
    }
}

/// Main application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the RocksDB storage directory
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Search tunables
    #[serde(default)]
    pub search: SearchSettings,
}

fn default_db_path() -> String {
    ProjectDirs::from("", "", "agent-directory")
        .map(|p| p.data_local_dir().join("db"))
        .unwrap_or_else(|| PathBuf::from("./data"))
        .to_string_lossy()
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_level: default_log_level(),
            search: SearchSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/agent-directory/config.toml)
    /// 3. Caller-specified config file (optional)
    /// 4. Environment variables (AGENT_DIRECTORY_*)
    pub fn load(config_path: Option<&str>) -> Result<Self, DirectoryError> {
        let config_dir = ProjectDirs::from("", "", "agent-directory")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("db_path", default_db_path())
            .map_err(|e| DirectoryError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| DirectoryError::Config(e.to_string()))?
            .set_default("search.default_limit", default_search_limit() as i64)
            .map_err(|e| DirectoryError::Config(e.to_string()))?
            .set_default("search.max_limit", default_max_limit() as i64)
            .map_err(|e| DirectoryError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // AGENT_DIRECTORY_DB_PATH, AGENT_DIRECTORY_SEARCH__DEFAULT_LIMIT, etc.
        builder = builder.add_source(
            Environment::with_prefix("AGENT_DIRECTORY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| DirectoryError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| DirectoryError::Config(e.to_string()))?;

        settings.search.validate().map_err(DirectoryError::Config)?;

        Ok(settings)
    }

    /// Expand ~ in db_path to the actual home directory.
    pub fn expanded_db_path(&self) -> PathBuf {
        if self.db_path.starts_with("~/") {
            if let Ok(home) = std::env::var("HOME") {
                return PathBuf::from(home).join(&self.db_path[2..]);
            }
        }
        PathBuf::from(&self.db_path)
    }
}
