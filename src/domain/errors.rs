//! Domain error types
//!
//! This module defines the error hierarchy for the intake pipeline. Rejected
//! submissions are reported through [`ValidationErrors`], contract breaches
//! during record construction through [`PipelineInvariantViolation`], and
//! everything around the pipeline (configuration, files, serialization)
//! through [`IntakeError`].

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Main survey-intake error type
///
/// This is the error type used by the ambient layers (configuration, storage,
/// CLI plumbing). The two pipeline errors convert into it with `?`.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The submission was rejected by the validator
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Record construction was attempted on data that could not have passed validation
    #[error("Pipeline invariant violated: {0}")]
    Invariant(#[from] PipelineInvariantViolation),

    /// Record storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Machine-readable code attached to every field issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// A required field was not supplied
    Missing,
    /// The value has the wrong JSON type
    TypeError,
    /// The string is shorter than the minimum length
    TooShort,
    /// The string is longer than the maximum length
    TooLong,
    /// The number is outside its allowed range
    OutOfRange,
    /// The email address is malformed
    InvalidEmail,
    /// Consent was not explicitly given
    ConsentRequired,
    /// The value is not one of the enumerated choices
    InvalidChoice,
}

impl IssueCode {
    /// Returns the wire name of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::TypeError => "type_error",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::OutOfRange => "out_of_range",
            Self::InvalidEmail => "invalid_email",
            Self::ConsentRequired => "consent_required",
            Self::InvalidChoice => "invalid_choice",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated constraint on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Name of the offending field
    pub field: &'static str,

    /// Constraint that was violated
    pub code: IssueCode,

    /// Human-readable description
    pub message: String,

    /// Offending value, only for fields that are safe to echo back
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldIssue {
    /// Creates a new issue without an echoed value
    pub fn new(field: &'static str, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
            value: None,
        }
    }

    /// Attaches the offending value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.field, self.code, self.message)
    }
}

/// Aggregated validation failure
///
/// Holds one [`FieldIssue`] per violated constraint, in field order. Never
/// empty when returned from the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{}", summarize(.issues))]
pub struct ValidationErrors {
    issues: Vec<FieldIssue>,
}

fn summarize(issues: &[FieldIssue]) -> String {
    let details = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("{} field issue(s): {details}", issues.len())
}

impl ValidationErrors {
    /// Wraps a list of issues
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Returns the issues in field order
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Number of issues
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether there are no issues
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if any issue was raised for `field`
    pub fn has_issue(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }

    /// Returns true if `field` was rejected with `code`
    pub fn has_code(&self, field: &str, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.field == field && i.code == code)
    }

    /// Distinct field names with at least one issue, in order
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::with_capacity(self.issues.len());
        for issue in &self.issues {
            if !fields.contains(&issue.field) {
                fields.push(issue.field);
            }
        }
        fields
    }

    /// Consumes self and returns the issues
    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }
}

/// Record construction was attempted on data the validator would never produce
///
/// This is a programming-contract breach, not a user-facing rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineInvariantViolation {
    /// No hashed email was available when a submission id had to be derived
    #[error("cannot derive submission id without a hashed email")]
    MissingEmailDigest,

    /// A required stored-record field was never set
    #[error("stored record field `{0}` is required")]
    MissingField(&'static str),

    /// The submission id resolved to an empty string
    #[error("submission id must not be empty")]
    EmptySubmissionId,
}

// Conversion from std::io::Error
impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        IntakeError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for IntakeError {
    fn from(err: toml::de::Error) -> Self {
        IntakeError::Configuration(format!("TOML parse error: {err}"))
    }
}
