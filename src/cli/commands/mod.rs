//! CLI command implementations
//!
//! Exit codes shared by every command:
//! - `0` success
//! - `1` submission rejected
//! - `2` configuration error
//! - `5` fatal error

pub mod check;
pub mod init;
pub mod process;
pub mod validate;

use crate::config::{load_config, parse_config, IntakeConfig};
use crate::domain::{FieldIssue, IssueCode, ValidationErrors};
use anyhow::Context;
use serde_json::Value;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Exit code for an accepted submission or a successful command
pub const EXIT_OK: i32 = 0;
/// Exit code for a rejected submission
pub const EXIT_REJECTED: i32 = 1;
/// Exit code for a configuration error
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for a fatal error
pub const EXIT_FATAL: i32 = 5;

/// Loads the configuration file, or the defaults when it does not exist
///
/// Environment overrides apply in both cases.
pub fn load_config_or_default(config_path: &str) -> crate::domain::Result<IntakeConfig> {
    if Path::new(config_path).exists() {
        load_config(config_path)
    } else {
        tracing::debug!(config_path = %config_path, "No configuration file; using defaults");
        parse_config("")
    }
}

/// Reads a submission body from a file, or from stdin when `input` is `-`
pub(crate) async fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut body = String::new();
        tokio::io::stdin()
            .read_to_string(&mut body)
            .await
            .context("Failed to read submission from stdin")?;
        Ok(body)
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("Failed to read submission file: {input}"))
    }
}

/// Parses a submission body as JSON
///
/// Malformed JSON is reported as a `body` issue; the body itself is not echoed.
pub(crate) fn parse_body(body: &str) -> Result<Value, ValidationErrors> {
    serde_json::from_str(body).map_err(|e| {
        ValidationErrors::new(vec![FieldIssue::new(
            "body",
            IssueCode::TypeError,
            format!(
                "submission is not valid JSON (line {}, column {})",
                e.line(),
                e.column()
            ),
        )])
    })
}

/// Prints validation issues as a JSON document on stdout
pub(crate) fn print_issues(errors: &ValidationErrors) -> anyhow::Result<()> {
    let document = serde_json::json!({ "issues": errors.issues() });
    println!(
        "{}",
        serde_json::to_string_pretty(&document).context("Failed to serialize issues")?
    );
    Ok(())
}
