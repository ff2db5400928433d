pub mod keybindings;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use keybindings::Keybindings;

/// Default settings embedded at compile time
const DEFAULT_CONFIG: &str = include_str!("defaults.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Redraw interval when idle
    pub tick_rate_ms: u64,
    pub show_badges: bool,
    /// Room snapshot to open when none is given on the command line
    pub default_rooms_path: Option<PathBuf>,
    /// Key string -> action name. Layered over the built-in table when the
    /// bindings are built, so user entries always win.
    pub keys: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            show_badges: true,
            default_rooms_path: None,
            keys: HashMap::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find config directory")]
    NoConfigDir,
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Built-in defaults, including the default key table
    pub fn defaults() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    pub fn keybindings(&self) -> Keybindings {
        let builtin = Self::defaults().keys;
        Keybindings::from_tables(&[&builtin, &self.keys])
    }

    /// Overlay a user config file on the defaults. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::defaults();
        if !path.exists() {
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let user: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.tick_rate_ms = user.tick_rate_ms;
        config.show_badges = user.show_badges;
        config.default_rooms_path = user.default_rooms_path;
        config.keys = user.keys;
        Ok(config)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }
}

pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("tagpanel"))
        .ok_or(ConfigError::NoConfigDir)
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}
