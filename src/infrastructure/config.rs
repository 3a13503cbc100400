// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    APP_DIR_NAME, DEFAULT_EXPORT_PREFIX, DEFAULT_MENU_ID, DEFAULT_MENU_TITLE,
    DEFAULT_RECENT_LIMIT, DEFAULT_STORAGE_KEY,
};

/// TOML configuration for noteclip
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_export_prefix")]
    pub file_prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MenuConfig {
    #[serde(default = "default_menu_id")]
    pub id: String,
    #[serde(default = "default_menu_title")]
    pub title: String,
}

// Default value functions
fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("notes.json")
}
fn default_storage_key() -> String { DEFAULT_STORAGE_KEY.to_string() }
fn default_recent_limit() -> usize { DEFAULT_RECENT_LIMIT }
fn default_export_directory() -> PathBuf { PathBuf::from(".") }
fn default_export_prefix() -> String { DEFAULT_EXPORT_PREFIX.to_string() }
fn default_menu_id() -> String { DEFAULT_MENU_ID.to_string() }
fn default_menu_title() -> String { DEFAULT_MENU_TITLE.to_string() }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_storage_key(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            file_prefix: default_export_prefix(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            id: default_menu_id(),
            title: default_menu_title(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {}", path.display()))?;

        Ok(config)
    }

    /// Load an explicitly given config file, or fall back to the default
    /// location. A missing default file yields the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `$XDG_CONFIG_HOME/noteclip/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }
}
