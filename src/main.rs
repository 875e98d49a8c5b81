// Survey Intake - Privacy-Preserving Survey Submission Pipeline
// Copyright (c) 2025 Survey Intake Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use survey_intake::cli::commands::{load_config_or_default, EXIT_FATAL};
use survey_intake::cli::{Cli, Commands};
use survey_intake::config::LoggingConfig;
use survey_intake::logging::{init_logging, LoggingGuard};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // File logging follows the configuration; a broken config still gets
    // console logging so the command can report it
    let (config_level, logging_config) = match load_config_or_default(&cli.config) {
        Ok(config) => (config.application.log_level, config.logging),
        Err(_) => ("info".to_string(), LoggingConfig::default()),
    };
    let log_level = cli.log_level.clone().unwrap_or(config_level);

    let guard = match start_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(code) => process::exit(code),
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Survey Intake - privacy-preserving survey submission pipeline"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            EXIT_FATAL
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Initialize logging, mapping failure to the fatal exit code
fn start_logging(log_level: &str, config: &LoggingConfig) -> Result<LoggingGuard, i32> {
    init_logging(log_level, config).map_err(|e| {
        eprintln!("Failed to initialize logging: {e}");
        EXIT_FATAL
    })
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Process(args) => args.execute(&cli.config).await,
        Commands::Check(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
