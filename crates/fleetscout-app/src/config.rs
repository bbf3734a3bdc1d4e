//! Configuration management for fleetscout
//!
//! Config stored at: ~/.config/fleetscout/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use fleetscout_types::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database file override
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    /// Default cap on candidate asking price for sourcing runs
    #[serde(default = "default_max_price")]
    pub max_price: u32,

    /// Default market to source from
    #[serde(default)]
    pub location: Option<String>,
}

fn default_max_price() -> u32 {
    25_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            max_price: default_max_price(),
            location: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fleetscout");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Resolve the database path: the override, or the platform data dir
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.db_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fleetscout");
        Ok(data_dir.join("vehicles.db"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config =
                serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}
