//! Domain models and types for survey-intake.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Intake shape** ([`SubmissionInput`]) produced by the validator, with
//!   email and age held as protected PII ([`pii`])
//! - **Persistence shape** ([`StoredRecord`]) produced by the anonymizer,
//!   built through [`StoredRecordBuilder`]
//! - **Schema revisions** ([`SchemaVersion`]) and the [`Source`] enumeration
//! - **Identifiers** ([`SubmissionId`])
//! - **Error types** ([`ValidationErrors`], [`PipelineInvariantViolation`],
//!   [`IntakeError`]) and the [`Result`] alias
//!
//! # Two shapes
//!
//! ```text
//! raw JSON ──validate──▶ SubmissionInput ──finalize──▶ StoredRecord
//!                         (plaintext PII,               (digests only,
//!                          optional id)                  id always set)
//! ```

pub mod errors;
pub mod ids;
pub mod pii;
pub mod record;
pub mod result;
pub mod submission;

// Re-export commonly used types for convenience
pub use errors::{FieldIssue, IntakeError, IssueCode, PipelineInvariantViolation, ValidationErrors};
pub use ids::SubmissionId;
pub use record::{StoredRecord, StoredRecordBuilder};
pub use result::Result;
pub use submission::{SchemaVersion, Source, SubmissionInput};
