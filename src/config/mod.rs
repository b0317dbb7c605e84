//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::fetch::{FeedConfig, DEFAULT_FEED_URL};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Draw-history feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSection {
    /// Feed URL
    #[serde(default = "default_feed_url")]
    pub url: String,

    /// Timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "powerpick/0.1.0".to_string()
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub feed: FeedSection,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            feed: FeedSection::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file, falling back to defaults when it is absent.
    pub fn load_or_default(path: &PathBuf) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Url::parse(&self.feed.url).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "Feed URL is not a valid URL: {}",
                self.feed.url
            )));
        }

        if self.feed.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Feed timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the HTTP feed configuration from this file config.
    pub fn feed_config(&self) -> Result<FeedConfig, ConfigError> {
        let url = Url::parse(&self.feed.url).map_err(|e| {
            ConfigError::ValidationError(format!("Feed URL is not a valid URL: {}", e))
        })?;

        Ok(FeedConfig {
            url,
            timeout: Duration::from_secs(self.feed.timeout_seconds),
            user_agent: self.feed.user_agent.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert_eq!(config.feed.timeout_seconds, 30);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_timeout() {
        let mut config = AppConfig::default();
        config.feed.timeout_seconds = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = AppConfig::default();
        config.feed.url = "not a url".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.feed.url, parsed.feed.url);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: AppConfig = toml::from_str("log_level = \"debug\"").unwrap();

        assert_eq!(parsed.log_level, "debug");
        assert_eq!(parsed.feed.url, DEFAULT_FEED_URL);
        assert_eq!(parsed.feed.timeout_seconds, 30);
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "log_level = \"warn\"\n\n[feed]\ntimeout_seconds = 5\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.feed.timeout_seconds, 5);
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_feed_config_conversion() {
        let config = AppConfig::default();
        let feed = config.feed_config().unwrap();

        assert_eq!(feed.url.as_str(), DEFAULT_FEED_URL);
        assert_eq!(feed.timeout, Duration::from_secs(30));
    }
}
