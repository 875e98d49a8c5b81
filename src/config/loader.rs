//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::IntakeConfig;
use crate::domain::errors::IntakeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `${VAR_NAME}` placeholder
static ENV_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var placeholder regex is valid")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into IntakeConfig
/// 4. Applies environment variable overrides (SURVEY_INTAKE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - An override has an invalid value
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use survey_intake::config::loader::load_config;
///
/// let config = load_config("survey-intake.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<IntakeConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(IntakeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        IntakeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text, with substitution, overrides, and validation
///
/// # Errors
///
/// Same as [`load_config`], minus file access.
pub fn parse_config(contents: &str) -> Result<IntakeConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: IntakeConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        IntakeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(
        schema_version = %config.intake.schema_version,
        storage_enabled = config.storage.enabled,
        "Configuration loaded"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_VAR_REGEX.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(IntakeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .map_err(|_| IntakeError::Configuration(format!("Invalid {var} value: {value}")))
}

/// Applies environment variable overrides using the SURVEY_INTAKE_* prefix
///
/// Variables follow the pattern `SURVEY_INTAKE_<SECTION>_<KEY>`, for example
/// `SURVEY_INTAKE_INTAKE_SCHEMA_VERSION` or `SURVEY_INTAKE_STORAGE_OUTPUT_PATH`.
fn apply_env_overrides(config: &mut IntakeConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SURVEY_INTAKE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Intake overrides
    if let Ok(val) = std::env::var("SURVEY_INTAKE_INTAKE_SCHEMA_VERSION") {
        config.intake.schema_version = val.parse().map_err(IntakeError::Configuration)?;
    }
    if let Ok(val) = std::env::var("SURVEY_INTAKE_INTAKE_DEFAULT_IP") {
        config.intake.default_ip = val;
    }

    // Storage overrides
    if let Ok(val) = std::env::var("SURVEY_INTAKE_STORAGE_ENABLED") {
        config.storage.enabled = parse_bool("SURVEY_INTAKE_STORAGE_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("SURVEY_INTAKE_STORAGE_OUTPUT_PATH") {
        config.storage.output_path = PathBuf::from(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SURVEY_INTAKE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("SURVEY_INTAKE_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("SURVEY_INTAKE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SURVEY_INTAKE_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
