use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::crypto::Address;

pub const VERSION: &str = env!("BUILD_VERSION");

// Log level used when a config does not set one
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Administrator cannot be the null address")]
    InvalidAdministrator,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings a registry is created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Collection name, immutable after creation
    pub name: String,
    /// Collection symbol, immutable after creation
    pub symbol: String,
    /// Initial administrator (hex encoded)
    pub administrator: Address,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl RegistryConfig {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, administrator: Address) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            administrator,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.administrator.is_zero() {
            return Err(ConfigError::InvalidAdministrator);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_hex() -> String {
        "ab".repeat(32)
    }

    #[test]
    fn test_parse_config() {
        let json = format!(
            r#"{{"name": "Soulbound Token", "symbol": "SBT", "administrator": "{}", "log_level": "debug"}}"#,
            admin_hex()
        );
        let config = RegistryConfig::from_json_str(&json).unwrap();
        assert_eq!(config.name, "Soulbound Token");
        assert_eq!(config.symbol, "SBT");
        assert_eq!(config.administrator, Address::new([0xab; 32]));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_log_level_defaults_to_info() {
        let json = format!(
            r#"{{"name": "n", "symbol": "s", "administrator": "{}"}}"#,
            admin_hex()
        );
        let config = RegistryConfig::from_json_str(&json).unwrap();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_null_administrator_rejected() {
        let json = format!(
            r#"{{"name": "n", "symbol": "s", "administrator": "{}"}}"#,
            "00".repeat(32)
        );
        assert!(matches!(
            RegistryConfig::from_json_str(&json),
            Err(ConfigError::InvalidAdministrator)
        ));
    }

    #[test]
    fn test_malformed_config_rejected() {
        assert!(matches!(
            RegistryConfig::from_json_str(r#"{"name": "n"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            RegistryConfig::load("/nonexistent/sbt.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        let config = RegistryConfig::new("Soulbound Token", "SBT", Address::new([0xab; 32]));
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(RegistryConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_log_level_strings() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!("trace".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert_eq!(
            log::LevelFilter::from(LogLevel::Off),
            log::LevelFilter::Off
        );
    }
}
