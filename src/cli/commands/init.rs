//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Starter configuration written by `init`
const STARTER_CONFIG: &str = r#"# Survey Intake Configuration File
# Privacy-preserving survey submission pipeline

[application]
name = "survey-intake"
log_level = "info"  # trace | debug | info | warn | error

[intake]
# v2 adds the `source` field; v1 is deprecated
schema_version = "v2"  # v1 | v2
# Recorded when a caller does not pass --ip
default_ip = "unknown"

[storage]
enabled = true
# One stored record per line; ${VAR} references are substituted at load time
output_path = "./data/records.jsonl"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "survey-intake.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing survey-intake configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, STARTER_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: survey-intake validate-config");
                println!("  3. Process a submission: survey-intake process --input body.json");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::domain::SchemaVersion;
    use tempfile::TempDir;

    #[test]
    fn test_starter_config_parses() {
        let config = parse_config(STARTER_CONFIG).unwrap();
        assert_eq!(config.intake.schema_version, SchemaVersion::V2);
        assert!(config.storage.enabled);
    }

    #[tokio::test]
    async fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("survey-intake.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), EXIT_OK);
        assert_eq!(fs::read_to_string(&output).unwrap(), STARTER_CONFIG);
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("survey-intake.toml");
        fs::write(&output, "# existing").unwrap();

        let mut args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_CONFIG);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");

        args.force = true;
        assert_eq!(args.execute().await.unwrap(), EXIT_OK);
    }
}
