//! Process command implementation
//!
//! Runs one submission through the pipeline. Accepted records are printed as
//! JSON on stdout and appended to the configured JSON-lines sink; rejections
//! print the issue list.

use super::{
    load_config_or_default, parse_body, print_issues, read_input, EXIT_CONFIG, EXIT_FATAL,
    EXIT_OK, EXIT_REJECTED,
};
use crate::adapters::storage::{JsonLinesSink, RecordSink};
use crate::config::IntakeConfig;
use crate::core::{Clock, FixedClock, Outcome, SubmissionPipeline, SystemClock};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Submission JSON file, or `-` for stdin
    #[arg(short, long)]
    pub input: String,

    /// Client address to record (defaults to `intake.default_ip`)
    #[arg(long)]
    pub ip: Option<String>,

    /// Pin the receive time (RFC 3339)
    #[arg(long)]
    pub now: Option<String>,

    /// JSON-lines file to append to (overrides `storage.output_path`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ProcessArgs {
    /// Execute the process command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let pinned = match self.now.as_deref().map(parse_now).transpose() {
            Ok(pinned) => pinned.map(FixedClock::new),
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG);
            }
        };
        let clock: &dyn Clock = match &pinned {
            Some(fixed) => fixed,
            None => &SystemClock,
        };

        let body = read_input(&self.input).await?;
        let raw = match parse_body(&body) {
            Ok(raw) => raw,
            Err(errors) => {
                crate::log_submission_rejected!(errors);
                print_issues(&errors)?;
                return Ok(EXIT_REJECTED);
            }
        };

        let client_ip = self.ip.as_deref().unwrap_or(&config.intake.default_ip);
        let pipeline = SubmissionPipeline::with_clock(config.intake.schema_version, clock);

        let outcome = match pipeline.process(&raw, client_ip) {
            Ok(outcome) => outcome,
            Err(violation) => {
                eprintln!("❌ Internal error: {violation}");
                return Ok(EXIT_FATAL);
            }
        };

        match outcome {
            Outcome::Accepted(record) => {
                if let Some(sink) = self.sink(&config)? {
                    sink.append(&record)
                        .with_context(|| format!("Failed to store record in {}", sink.describe()))?;
                    eprintln!("✅ Record stored in {}", sink.describe());
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&record).context("Failed to serialize record")?
                );
                Ok(EXIT_OK)
            }
            Outcome::Rejected(errors) => {
                eprintln!("❌ Submission rejected: {} issue(s)", errors.len());
                print_issues(&errors)?;
                Ok(EXIT_REJECTED)
            }
        }
    }

    /// Sink for accepted records; `--output` wins over the configuration
    fn sink(&self, config: &IntakeConfig) -> anyhow::Result<Option<JsonLinesSink>> {
        let path = match &self.output {
            Some(path) => path.clone(),
            None if config.storage.enabled => config.storage.output_path.clone(),
            None => return Ok(None),
        };
        Ok(Some(JsonLinesSink::new(path)?))
    }
}

/// Parses an RFC 3339 timestamp into UTC
fn parse_now(value: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Invalid --now timestamp '{value}'; expected RFC 3339"))
}
