use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use super::client::ClientConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::dns_record::RecordType;

const LOCAL_CONFIG_FILE: &str = "dnsprobe.toml";

/// Main configuration structure for dnsprobe
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolver, timeout and query defaults
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsprobe.toml in current directory
    /// 3. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.client.server = server;
        }
        if let Some(record_type) = overrides.record_type {
            self.client.record_type = record_type;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.client.timeout_ms = timeout_ms;
        }
        if let Some(recursion_desired) = overrides.recursion_desired {
            self.client.recursion_desired = recursion_desired;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = Some(level);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server_addr()?;
        self.record_type()?;

        if self.client.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn server_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.client.server.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "Invalid server address '{}'. Expected IP:PORT",
                self.client.server
            ))
        })
    }

    pub fn record_type(&self) -> Result<RecordType, ConfigError> {
        self.client
            .record_type
            .parse()
            .map_err(|_| ConfigError::Validation(format!(
                "Type '{}' not implemented",
                self.client.record_type
            )))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.client.timeout_ms)
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub record_type: Option<String>,
    pub timeout_ms: Option<u64>,
    pub recursion_desired: Option<bool>,
    pub log_level: Option<String>,
}
