use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Standard configuration directory for the current platform.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trackr")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Default database location under the platform data dir.
    pub fn database_file() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trackr")
            .join("db.sqlite3")
    }

    /// Load the config file, falling back to defaults when it does not
    /// exist or cannot be parsed.
    pub fn load() -> Self {
        let path = Self::config_file();
        match fs::read_to_string(&path) {
            Ok(raw) => serde_yaml::from_str(&raw).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let raw = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize config: {}", e)))?;
        fs::write(Self::config_file(), raw)?;
        Ok(())
    }
}
