//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the survey-intake configuration file.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading substitutes variables, applies overrides, and validates
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        print!("  Schema Version: {}", config.intake.schema_version);
        if config.intake.schema_version.is_deprecated() {
            print!(" (deprecated)");
        }
        println!();
        println!("  Default Client IP: {}", config.intake.default_ip);
        if config.storage.enabled {
            println!("  Record Sink: {}", config.storage.output_path.display());
        } else {
            println!("  Record Sink: disabled");
        }
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(EXIT_OK)
    }
}
