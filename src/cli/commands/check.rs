//! Check command implementation
//!
//! Validates one submission against the configured schema version without
//! anonymizing or storing it.

use super::{
    load_config_or_default, parse_body, print_issues, read_input, EXIT_CONFIG, EXIT_OK,
    EXIT_REJECTED,
};
use crate::intake::validate;
use clap::Args;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Submission JSON file, or `-` for stdin
    #[arg(short, long)]
    pub input: String,
}

impl CheckArgs {
    /// Execute the check command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let body = read_input(&self.input).await?;
        let result = parse_body(&body)
            .and_then(|raw| validate(&raw, config.intake.schema_version).map(|_| ()));

        match result {
            Ok(()) => {
                println!(
                    "✅ Submission is valid for schema {}",
                    config.intake.schema_version
                );
                Ok(EXIT_OK)
            }
            Err(errors) => {
                eprintln!("❌ Submission is invalid: {} issue(s)", errors.len());
                print_issues(&errors)?;
                Ok(EXIT_REJECTED)
            }
        }
    }
}
