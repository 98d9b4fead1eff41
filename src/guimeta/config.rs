//! # Configuration
//!
//! Settings are stored as `config.json` in the guimeta config directory
//! (`--config-dir`, or the OS config location from `directories`).
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `shared-jdbc-folders` | `lib/jdbc` | Comma-separated driver library folders |
//! | `messages` | none | Message catalog used to translate labels |
//!
//! The `HOP_SHARED_JDBC_FOLDERS` environment variable overrides the stored
//! folder list.

use crate::error::{GuiMetaError, Result};
use crate::plugin::{parse_library_folders, SHARED_JDBC_FOLDERS_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_SHARED_JDBC_FOLDERS: &str = "shared-jdbc-folders";
pub const KEY_MESSAGES: &str = "messages";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuiMetaConfig {
    /// Comma-separated list of driver library folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_jdbc_folders: Option<String>,

    /// Message catalog file for label translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<PathBuf>,
}

impl GuiMetaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GuiMetaError::Io)?;
        let config: GuiMetaConfig = serde_json::from_str(&content).map_err(GuiMetaError::Json)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GuiMetaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GuiMetaError::Json)?;
        fs::write(config_path, content).map_err(GuiMetaError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_SHARED_JDBC_FOLDERS => Some(self.shared_jdbc_folders.clone().unwrap_or_default()),
            KEY_MESSAGES => Some(
                self.messages
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a value by key. An empty value clears the setting.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            KEY_SHARED_JDBC_FOLDERS => {
                self.shared_jdbc_folders = (!value.is_empty()).then(|| value.to_string());
            }
            KEY_MESSAGES => {
                self.messages = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            other => {
                return Err(GuiMetaError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    /// Library folders after applying `env_value` (the environment override).
    ///
    /// An empty environment value does not override the file value.
    pub fn jdbc_folders_with(&self, env_value: Option<&str>) -> Vec<String> {
        let env_value = env_value.filter(|value| !value.is_empty());
        parse_library_folders(env_value.or(self.shared_jdbc_folders.as_deref()))
    }

    /// Library folders after applying the process environment.
    pub fn effective_jdbc_folders(&self) -> Vec<String> {
        let env_value = std::env::var(SHARED_JDBC_FOLDERS_KEY).ok();
        self.jdbc_folders_with(env_value.as_deref())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_SHARED_JDBC_FOLDERS, KEY_MESSAGES]
    }
}
