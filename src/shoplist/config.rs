//! # Configuration
//!
//! Client settings live in `<data-dir>/config.json`. A missing file means all
//! defaults; missing fields fall back individually through serde defaults.
//!
//! ## Available Settings
//!
//! | Key          | Default | Description                                   |
//! |--------------|---------|-----------------------------------------------|
//! | `export-dir` | `.`     | Directory `shoplist export` writes into       |
//! | `color`      | `auto`  | `auto`, `always` or `never` for styled output |
//!
//! ## CLI Usage
//!
//! - `shoplist config` shows all values.
//! - `shoplist config get <key>` shows one value.
//! - `shoplist config set <key> <value>` persists a value.

use crate::error::{Result, ShoplistError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_DIR: &str = ".";

pub const KEY_EXPORT_DIR: &str = "export-dir";
pub const KEY_COLOR: &str = "color";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(format!(
                "Invalid color value: {} (expected auto, always or never)",
                other
            )),
        }
    }
}

/// Client configuration, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoplistConfig {
    /// Directory export files are written into.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    #[serde(default)]
    pub color: ColorChoice,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

impl Default for ShoplistConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            color: ColorChoice::default(),
        }
    }
}

impl ShoplistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShoplistError::Io)?;
        let config: ShoplistConfig =
            serde_json::from_str(&content).map_err(ShoplistError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShoplistError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(ShoplistError::Serialization)?;
        fs::write(config_path, content).map_err(ShoplistError::Io)?;
        Ok(())
    }

    /// Value of `key` formatted for display, or `None` for an unknown key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_EXPORT_DIR => Some(self.export_dir.display().to_string()),
            KEY_COLOR => Some(self.color.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_EXPORT_DIR => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ShoplistError::Config(
                        "export-dir cannot be empty".to_string(),
                    ));
                }
                self.export_dir = PathBuf::from(value);
            }
            KEY_COLOR => {
                self.color = value.parse().map_err(ShoplistError::Config)?;
            }
            other => {
                return Err(ShoplistError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// All keys with their display values, in a stable order.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        [KEY_EXPORT_DIR, KEY_COLOR]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
            .collect()
    }
}
