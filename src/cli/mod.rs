//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for survey-intake using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Survey Intake - privacy-preserving survey submission pipeline
#[derive(Parser, Debug)]
#[command(name = "survey-intake")]
#[command(version, about, long_about = None)]
#[command(author = "Survey Intake Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "survey-intake.toml",
        env = "SURVEY_INTAKE_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SURVEY_INTAKE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one submission through the pipeline and store the record
    Process(commands::process::ProcessArgs),

    /// Validate one submission without storing anything
    Check(commands::check::CheckArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_process() {
        let cli = Cli::parse_from(["survey-intake", "process", "--input", "body.json"]);
        assert_eq!(cli.config, "survey-intake.toml");
        let Commands::Process(args) = cli.command else {
            panic!("expected process command");
        };
        assert_eq!(args.input, "body.json");
        assert!(args.ip.is_none());
        assert!(args.now.is_none());
    }

    #[test]
    fn test_cli_parse_process_with_options() {
        let cli = Cli::parse_from([
            "survey-intake",
            "process",
            "-i",
            "-",
            "--ip",
            "203.0.113.7",
            "--now",
            "2024-03-01T10:15:00Z",
            "--output",
            "out.jsonl",
        ]);
        let Commands::Process(args) = cli.command else {
            panic!("expected process command");
        };
        assert_eq!(args.input, "-");
        assert_eq!(args.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(args.now.as_deref(), Some("2024-03-01T10:15:00Z"));
        assert_eq!(args.output.as_deref(), Some(std::path::Path::new("out.jsonl")));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["survey-intake", "--config", "custom.toml", "check", "-i", "-"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["survey-intake", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["survey-intake", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["survey-intake", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_process_requires_input() {
        assert!(Cli::try_parse_from(["survey-intake", "process"]).is_err());
    }
}
