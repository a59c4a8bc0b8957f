//! Composer configuration.
//!
//! Resolution order for the API base URL: `MENTIO_API_URL` environment
//! variable, then `config.json` under the user config dir, then the local
//! development default.

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{MentioError, MentioResult};

/// Default backend when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "MENTIO_API_URL";

/// Runtime configuration for the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST backend serving mention candidates
    pub api_base_url: String,
}

/// On-disk form of the config file. Fields are optional so a sparse file
/// still loads.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Load configuration: env var, then config file, then defaults.
    ///
    /// A missing config file is fine; a present but unparseable one is an
    /// error (silently ignoring it would hide typos forever).
    pub fn load() -> MentioResult<Self> {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                return Ok(Config::new().with_api_base_url(url));
            }
        }

        if let Some(path) = Self::config_file_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Config::default())
    }

    /// Load configuration from a specific JSON file.
    pub fn load_from_file(path: &std::path::Path) -> MentioResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile =
            serde_json::from_str(&contents).map_err(|e| MentioError::Config {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut config = Config::default();
        if let Some(url) = file.api_base_url {
            config.api_base_url = url;
        }
        Ok(config)
    }

    /// `$CONFIG_DIR/mentio/config.json`, if a config dir exists on this
    /// platform.
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mentio").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_builder() {
        let config = Config::new().with_api_base_url("https://api.example.test");
        assert_eq!(config.api_base_url, "https://api.example.test");
    }

    #[test]
    #[serial]
    fn test_env_override_wins() {
        std::env::set_var(API_URL_ENV, "http://env.test:9000");
        let config = Config::load().unwrap();
        std::env::remove_var(API_URL_ENV);
        assert_eq!(config.api_base_url, "http://env.test:9000");
    }

    #[test]
    #[serial]
    fn test_empty_env_is_ignored() {
        std::env::set_var(API_URL_ENV, "");
        let config = Config::load().unwrap();
        std::env::remove_var(API_URL_ENV);
        // Falls back to file or default, never an empty URL
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"api_base_url": "http://file.test:8080"}}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.api_base_url, "http://file.test:8080");
    }

    #[test]
    fn test_load_from_sparse_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, MentioError::Config { .. }));
    }
}
