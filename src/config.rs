//! Configuration file handling.
//!
//! This module provides loading and saving of wifiscan configuration
//! from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/wifiscan/config.toml`
//! - macOS: `~/Library/Application Support/wifiscan/config.toml`
//! - Windows: `%APPDATA%\wifiscan\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 8000
//! allowed_origins = ["http://localhost:5173", "https://circle-apps.github.io"]
//! airport_path = "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport"
//! log_filter = "info"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::{config_dir, AIRPORT_PATH};

/// Application configuration.
///
/// Every field has a default, so a partial file (or none at all) is valid.
///
/// # Example
///
/// ```no_run
/// use wifiscan::Config;
///
/// let config = Config::load().unwrap();
///
/// println!("Listening on {}", config.bind_addr());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to.
    ///
    /// Default: `127.0.0.1`
    pub host: String,

    /// Default: 8000
    pub port: u16,

    /// Browser origins allowed to call the API.
    ///
    /// Requests from these origins may use any method and header, with
    /// credentials.
    pub allowed_origins: Vec<String>,

    /// Location of the macOS `airport` utility.
    pub airport_path: PathBuf,

    /// `tracing` filter directive used when `RUST_LOG` is not set.
    ///
    /// Default: `info`
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "https://circle-apps.github.io".to_string(),
            ],
            airport_path: PathBuf::from(AIRPORT_PATH),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific file, falling back to defaults
    /// when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// `host:port` for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.airport_path, PathBuf::from(AIRPORT_PATH));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();

        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "port = 9090\nallowed_origins = [\"http://example.test\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.allowed_origins, vec!["http://example.test".to_string()]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.airport_path, PathBuf::from(AIRPORT_PATH));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "port = \"not a number\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            port: 8123,
            log_filter: "wifiscan=debug".to_string(),
            ..Config::default()
        };

        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_generate_default_config_parses() {
        let text = Config::generate_default_config();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed, Config::default());
    }
}
