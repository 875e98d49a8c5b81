//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output filtered by level or `RUST_LOG`
//! - Local JSON file logging with rotation
//!
//! Submission content is never logged. Events carry identifiers, digests,
//! counts, and field names only.
//!
//! # Example
//!
//! ```no_run
//! use survey_intake::logging::init_logging;
//! use survey_intake::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an accepted submission
///
/// # Example
///
/// ```no_run
/// use survey_intake::log_submission_accepted;
/// use survey_intake::domain::{SchemaVersion, SubmissionId};
///
/// let id = SubmissionId::new("abc123").unwrap();
/// log_submission_accepted!(&id, SchemaVersion::V2, chrono::Utc::now());
/// ```
#[macro_export]
macro_rules! log_submission_accepted {
    ($submission_id:expr, $schema_version:expr, $received_at:expr) => {
        tracing::info!(
            submission_id = %$submission_id,
            schema_version = %$schema_version,
            received_at = %$received_at,
            "Submission accepted"
        );
    };
}

/// Log a rejected submission by field name and issue count
///
/// # Example
///
/// ```no_run
/// use survey_intake::log_submission_rejected;
/// use survey_intake::domain::{FieldIssue, IssueCode, ValidationErrors};
///
/// let errors = ValidationErrors::new(vec![FieldIssue::new("age", IssueCode::Missing, "age is required")]);
/// log_submission_rejected!(&errors);
/// ```
#[macro_export]
macro_rules! log_submission_rejected {
    ($errors:expr) => {
        tracing::warn!(
            issue_count = $errors.len(),
            fields = ?$errors.fields(),
            "Submission rejected"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use survey_intake::log_error_with_context;
/// use survey_intake::domain::IntakeError;
///
/// let error = IntakeError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
