//! Structured logging setup using tracing
//!
//! Console output is always on. A JSON file layer with daily or hourly
//! rotation is added when `logging.local_enabled` is set.

use crate::config::LoggingConfig;
use crate::domain::{IntakeError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// File name prefix for rotated log files
const LOG_FILE_PREFIX: &str = "survey-intake.log";

/// Guard that must be kept alive for the duration of the program
/// to ensure logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Initialize the logging system based on configuration
///
/// `RUST_LOG` takes precedence over `log_level_str` when set.
///
/// # Arguments
///
/// * `log_level_str` - Log level as a string (trace, debug, info, warn, error)
/// * `config` - Logging configuration
///
/// # Errors
///
/// Returns a configuration error for an unknown level, or when the log
/// directory cannot be created. A subscriber that is already installed is
/// left in place.
///
/// # Example
///
/// ```no_run
/// use survey_intake::logging::init_logging;
/// use survey_intake::config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// let _guard = init_logging("info", &config).expect("Failed to initialize logging");
/// // Keep _guard alive for the duration of the program
/// ```
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("survey_intake={}", log_level)))
    };

    let mut layers = Vec::new();

    // Console layer writes to stderr so stdout stays machine-readable
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter());

    layers.push(console_layer.boxed());

    let file_guard = if config.local_enabled {
        let rotation = parse_rotation(&config.local_rotation)?;

        std::fs::create_dir_all(&config.local_path).map_err(|e| {
            IntakeError::Configuration(format!(
                "Failed to create log directory {}: {}",
                config.local_path, e
            ))
        })?;

        let file_appender = RollingFileAppender::new(rotation, &config.local_path, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_writer(non_blocking)
            .with_filter(env_filter());

        layers.push(file_layer.boxed());
        Some(guard)
    } else {
        None
    };

    if tracing_subscriber::registry().with(layers).try_init().is_err() {
        tracing::debug!("Global subscriber already installed; keeping it");
    }

    tracing::debug!(
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(IntakeError::Configuration(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))),
    }
}

fn parse_rotation(rotation: &str) -> Result<Rotation> {
    match rotation {
        "daily" => Ok(Rotation::DAILY),
        "hourly" => Ok(Rotation::HOURLY),
        other => Err(IntakeError::Configuration(format!(
            "Invalid log rotation: {}. Must be one of: daily, hourly",
            other
        ))),
    }
}
