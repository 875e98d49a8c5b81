//! Record finalization
//!
//! [`finalize`] is the second pipeline stage: it turns a validated
//! [`SubmissionInput`] into a [`StoredRecord`] by digesting the PII fields,
//! resolving the submission identifier, and stamping reception metadata.
//!
//! # Examples
//!
//! ```
//! use survey_intake::anonymization::finalize;
//! use survey_intake::intake::validate;
//! use survey_intake::domain::SchemaVersion;
//! use chrono::{TimeZone, Utc};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "name": "Ada",
//!     "email": "ada@example.com",
//!     "age": 30,
//!     "consent": true,
//!     "rating": 5,
//!     "source": "homepage"
//! });
//! let input = validate(&raw, SchemaVersion::V2).unwrap();
//! let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap();
//!
//! let record = finalize(input, now, "203.0.113.7").unwrap();
//! assert_eq!(
//!     record.submission_id().as_str(),
//!     "1da56d540dee556b3de1130d8fadec95ce2df6f5f3c466a560e553c45b3f1a42"
//! );
//! ```

use super::digest::{hash_age, hash_email};
use super::identifier::resolve_submission_id;
use crate::domain::{PipelineInvariantViolation, StoredRecord, SubmissionInput};
use chrono::{DateTime, Utc};

/// Builds the stored record for a validated submission
///
/// The intake value is consumed, so its plaintext PII is zeroed when this
/// function returns. `client_ip` is recorded as given.
///
/// # Errors
///
/// Returns a [`PipelineInvariantViolation`] only if record construction
/// finds a required value missing, which cannot happen for input produced
/// by [`validate`](crate::intake::validate).
pub fn finalize(
    input: SubmissionInput,
    now: DateTime<Utc>,
    client_ip: &str,
) -> Result<StoredRecord, PipelineInvariantViolation> {
    let hashed_email = hash_email(input.email());
    let hashed_age = hash_age(input.age());
    let submission_id = resolve_submission_id(input.submission_id(), Some(&hashed_email), now)?;

    let derived = input.submission_id().is_none();
    tracing::debug!(
        submission_id = %submission_id,
        derived_id = derived,
        "Finalizing submission"
    );

    StoredRecord::builder()
        .schema_version(input.schema_version())
        .submission_id(submission_id)
        .received_at(now)
        .ip(client_ip)
        .name(input.name())
        .hashed_email(hashed_email)
        .hashed_age(hashed_age)
        .consent(input.consent())
        .rating(input.rating())
        .user_agent(input.user_agent().map(str::to_string))
        .comments(input.comments().map(str::to_string))
        .source(input.source())
        .build()
}
