//! Validate → anonymize → identify → freeze
//!
//! [`SubmissionPipeline`] composes [`validate`] and [`finalize`] with an
//! injected [`Clock`]. Each call is independent: the pipeline holds no
//! mutable state, performs no I/O, and can be shared across threads.
//!
//! ```text
//!              ┌──────────── Rejected(ValidationErrors)
//! Validating ──┤
//!              └──────────── Accepted(StoredRecord)
//! ```

use super::clock::{Clock, SystemClock};
use crate::anonymization::finalize;
use crate::domain::{PipelineInvariantViolation, SchemaVersion, StoredRecord, ValidationErrors};
use crate::intake::validate;
use serde_json::Value;

/// Terminal state of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The submission produced a stored record
    Accepted(StoredRecord),
    /// The submission was rejected; nothing was produced
    Rejected(ValidationErrors),
}

impl Outcome {
    /// Whether a record was produced
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The stored record, if accepted
    pub fn record(&self) -> Option<&StoredRecord> {
        match self {
            Self::Accepted(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }

    /// The validation errors, if rejected
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }

    /// Converts into a `Result`, treating rejection as the error
    pub fn into_result(self) -> Result<StoredRecord, ValidationErrors> {
        match self {
            Self::Accepted(record) => Ok(record),
            Self::Rejected(errors) => Err(errors),
        }
    }
}

/// Stateless submission pipeline
///
/// # Examples
///
/// ```
/// use survey_intake::core::clock::FixedClock;
/// use survey_intake::core::pipeline::SubmissionPipeline;
/// use survey_intake::domain::SchemaVersion;
/// use chrono::{TimeZone, Utc};
/// use serde_json::json;
///
/// let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap());
/// let pipeline = SubmissionPipeline::with_clock(SchemaVersion::V2, clock);
///
/// let outcome = pipeline
///     .process(
///         &json!({"name": "Ada", "email": "ada@example.com", "age": 30, "consent": true, "rating": 5}),
///         "203.0.113.7",
///     )
///     .unwrap();
/// assert!(outcome.is_accepted());
/// ```
#[derive(Debug, Clone)]
pub struct SubmissionPipeline<C = SystemClock> {
    schema_version: SchemaVersion,
    clock: C,
}

impl SubmissionPipeline<SystemClock> {
    /// Creates a pipeline reading the system clock
    pub fn new(schema_version: SchemaVersion) -> Self {
        Self::with_clock(schema_version, SystemClock)
    }
}

impl<C: Clock> SubmissionPipeline<C> {
    /// Creates a pipeline with an injected clock
    pub fn with_clock(schema_version: SchemaVersion, clock: C) -> Self {
        if schema_version.is_deprecated() {
            tracing::warn!(
                schema_version = %schema_version,
                "Pipeline configured with a deprecated schema version"
            );
        }
        Self {
            schema_version,
            clock,
        }
    }

    /// Schema revision submissions are validated against
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Runs one raw submission through the pipeline
    ///
    /// The clock is read once, after validation succeeds, so `received_at`
    /// and the identifier hour bucket always agree.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineInvariantViolation`] if record construction breaks
    /// its contract. Rejected submissions are an `Ok(Outcome::Rejected)`.
    pub fn process(
        &self,
        raw: &Value,
        client_ip: &str,
    ) -> Result<Outcome, PipelineInvariantViolation> {
        let input = match validate(raw, self.schema_version) {
            Ok(input) => input,
            Err(errors) => {
                crate::log_submission_rejected!(errors);
                return Ok(Outcome::Rejected(errors));
            }
        };

        let now = self.clock.now();
        match finalize(input, now, client_ip) {
            Ok(record) => {
                crate::log_submission_accepted!(
                    record.submission_id(),
                    record.schema_version(),
                    record.received_at()
                );
                Ok(Outcome::Accepted(record))
            }
            Err(violation) => {
                crate::log_error_with_context!(violation, "Pipeline invariant violated");
                Err(violation)
            }
        }
    }
}
