//! Config file handling and default path resolution.
//!
//! The config file is the only place the CLI learns where the reflections
//! database lives; the journal itself only ever receives a resolved path.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_NAME: &str = "reflectionist";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while reading or writing the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error while reading or writing the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid TOML or has the wrong shape.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Config could not be rendered as TOML.
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// `[general].database` is not set.
    #[error("config does not name a database (missing `[general].database`)")]
    MissingDatabase,
}

/// Contents of the config file.
///
/// ```toml
/// [general]
/// database = "/home/me/.me_reflections.json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: General,
}

/// `[general]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct General {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

impl Config {
    /// Config pointing at the database file `database`.
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            general: General {
                database: Some(database.into()),
            },
        }
    }

    /// Reads and parses the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Writes the config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolved path of the reflections database.
    pub fn database_path(&self) -> Result<&Path, ConfigError> {
        self.general
            .database
            .as_deref()
            .ok_or(ConfigError::MissingDatabase)
    }
}

/// Picks the explicit config path, falling back to [`default_config_path`].
pub fn resolve_config_path(
    explicit: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    explicit
        .or_else(default_config_path)
        .ok_or_else(|| "could not determine a config path; pass --config".into())
}

/// `$XDG_CONFIG_HOME/reflectionist/config.toml`, else `$HOME/.config/reflectionist/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = non_empty_var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|home| home.join(".config")))?;
    Some(base.join(APP_NAME).join(CONFIG_FILE_NAME))
}

/// `$HOME/.<user>_reflections.json`, where `<user>` is the last component of `$HOME`.
pub fn default_database_path() -> Option<PathBuf> {
    home_dir().map(|home| database_path_in(&home))
}

fn database_path_in(home: &Path) -> PathBuf {
    let user = home
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    home.join(format!(".{user}_reflections.json"))
}

fn home_dir() -> Option<PathBuf> {
    non_empty_var("HOME").map(PathBuf::from)
}

fn non_empty_var(key: &str) -> Option<std::ffi::OsString> {
    env::var_os(key).filter(|value| !value.is_empty())
}
