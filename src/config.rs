//! Configuration management for Umeme
//!
//! This module handles loading, validation, and management of the application
//! configuration from YAML files, with the API key also accepted from the
//! process environment.

use crate::error::{Result, UmemeError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default power-breakdown endpoint (Electricity Maps v3)
pub const DEFAULT_ENDPOINT: &str = "https://api.electricitymaps.com/v3/power-breakdown/latest";

/// Environment variables consulted for the API key, in priority order
pub const API_KEY_ENV_VARS: [&str; 2] = ["UMEME_API_KEY", "API_KEY"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Upstream power-breakdown API
    pub api: ApiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Web server binding configuration
    pub web: WebConfig,

    /// Presentation settings
    pub display: DisplayConfig,
}

/// Power-breakdown API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Whether to attempt live data at all
    pub enabled: bool,

    /// Full URL of the latest power-breakdown endpoint
    pub endpoint: String,

    /// Zone identifier sent as the `zone` query parameter
    pub zone: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Optional auth token; requests go out unauthenticated without it
    pub api_key: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Path to log file; its directory receives the rotated files
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to console
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Bind address
    pub host: String,

    /// TCP port
    pub port: u16,

    /// Directory holding the dashboard page
    pub static_dir: String,
}

/// Presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// IANA timezone used for the "last updated" clock
    pub timezone: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            zone: "KE".to_string(),
            timeout_secs: 10,
            api_key: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            file: "/tmp/umeme.log".to_string(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            static_dir: "./webui".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: "Africa/Nairobi".to_string(),
        }
    }
}

impl ApiConfig {
    /// The configured key, if it holds anything besides whitespace
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the first default location that exists,
    /// then apply environment overrides
    pub fn load() -> Result<Self> {
        let default_paths = ["umeme_config.yaml", "/etc/umeme/config.yaml"];

        let mut config = default_paths
            .iter()
            .find(|p| Path::new(p).exists())
            .map(Self::from_file)
            .transpose()?
            .unwrap_or_default();

        config.apply_env_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Apply overrides using `lookup` as the environment. The first non-blank
    /// value among [`API_KEY_ENV_VARS`] replaces the configured key.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|v| !v.trim().is_empty())
        {
            self.api.api_key = Some(key.trim().to_string());
        }
    }

    /// Copy of this configuration safe to expose over HTTP
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api.api_key.is_some() {
            copy.api.api_key = Some("***".to_string());
        }
        copy
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(UmemeError::validation(
                "api.endpoint",
                "Endpoint cannot be empty",
            ));
        }

        if self.api.zone.trim().is_empty() {
            return Err(UmemeError::validation("api.zone", "Zone cannot be empty"));
        }

        if self.api.timeout_secs == 0 {
            return Err(UmemeError::validation(
                "api.timeout_secs",
                "Must be greater than 0",
            ));
        }

        if self.web.port == 0 {
            return Err(UmemeError::validation(
                "web.port",
                "Port must be greater than 0",
            ));
        }

        if self.display.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(UmemeError::validation(
                "display.timezone",
                "Unknown IANA timezone",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.zone, "KE");
        assert_eq!(config.api.timeout_secs, 10);
        assert!(config.api.api_key.is_none());
        assert_eq!(config.display.timezone, "Africa/Nairobi");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.api.zone = String::new();
        assert!(config.validate().is_err());

        config = Config::default();
        config.web.port = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.display.timezone = "Mars/Olympus".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut config = Config::default();
        config.api.api_key = Some("from-file".to_string());
        config.apply_env_overrides_from(|k| (k == "API_KEY").then(|| "from-env".to_string()));
        assert_eq!(config.api.effective_api_key(), Some("from-env"));
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides_from(|_| Some("   ".to_string()));
        assert!(config.api.effective_api_key().is_none());
    }

    #[test]
    fn redacted_hides_key() {
        let mut config = Config::default();
        config.api.api_key = Some("secret".to_string());
        assert_eq!(config.redacted().api.api_key.as_deref(), Some("***"));
    }
}
