//! Configuration schema types
//!
//! Every section and every key has a default, so an empty file is a valid
//! configuration.

use crate::domain::SchemaVersion;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main survey-intake configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Pipeline settings
    #[serde(default)]
    pub intake: IntakeSettings,

    /// Record sink settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl IntakeConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.intake.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name, used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_app_name() -> String {
    "survey-intake".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("application.name cannot be empty".to_string());
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid application.log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeSettings {
    /// Schema revision submissions are validated against
    #[serde(default)]
    pub schema_version: SchemaVersion,

    /// Client address recorded when the caller does not provide one
    #[serde(default = "default_ip")]
    pub default_ip: String,
}

fn default_ip() -> String {
    "unknown".to_string()
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            default_ip: default_ip(),
        }
    }
}

impl IntakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.default_ip.trim().is_empty() {
            return Err("intake.default_ip cannot be empty".to_string());
        }
        Ok(())
    }
}

/// JSON-lines record sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Append accepted records to `output_path`
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// JSON-lines file receiving one stored record per line
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_true() -> bool {
    true
}

fn default_output_path() -> PathBuf {
    PathBuf::from("./data/records.jsonl")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            output_path: default_output_path(),
        }
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.output_path.as_os_str().is_empty() {
            return Err("storage.output_path cannot be empty when storage is enabled".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = IntakeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.intake.schema_version, SchemaVersion::V2);
        assert_eq!(config.intake.default_ip, "unknown");
        assert!(config.storage.enabled);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: IntakeConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.name, "survey-intake");
        assert_eq!(config.application.log_level, "info");
        assert_eq!(
            config.storage.output_path,
            PathBuf::from("./data/records.jsonl")
        );
    }

    #[test]
    fn test_schema_version_from_toml() {
        let config: IntakeConfig = toml::from_str("[intake]\nschema_version = \"v1\"\n").unwrap();
        assert_eq!(config.intake.schema_version, SchemaVersion::V1);

        assert!(toml::from_str::<IntakeConfig>("[intake]\nschema_version = \"v9\"\n").is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = IntakeConfig::default();
        config.application.log_level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("application.log_level"));
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = IntakeConfig::default();
        config.logging.local_rotation = "size".to_string();
        assert!(config.validate().unwrap_err().contains("local_rotation"));
    }

    #[test]
    fn test_storage_path_required_when_enabled() {
        let mut config = IntakeConfig::default();
        config.storage.output_path = PathBuf::new();
        assert!(config.validate().is_err());

        config.storage.enabled = false;
        assert!(config.validate().is_ok());
    }
}
