//! Submission identifier derivation
//!
//! When the caller does not supply a `submission_id`, one is derived as
//!
//! ```text
//! sha256_hex( hashed_email ++ YYYYMMDDHH )
//! ```
//!
//! where the bucket is the UTC hour of `now`. Repeated submissions from the
//! same address within one UTC hour share an identifier, which lets storage
//! de-duplicate them; the identifier changes at every hour boundary.

use super::digest::sha256_hex;
use crate::domain::{PipelineInvariantViolation, SubmissionId};
use chrono::{DateTime, Utc};

/// UTC hour bucket, e.g. `2024030110`
pub fn hour_bucket(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d%H").to_string()
}

/// Derives an identifier from the email digest and the hour of `now`
///
/// Yields `None` when no email digest is available.
pub fn derive_submission_id(hashed_email: Option<&str>, now: DateTime<Utc>) -> Option<SubmissionId> {
    let hashed_email = hashed_email.filter(|h| !h.is_empty())?;
    let combined = format!("{hashed_email}{}", hour_bucket(now));
    SubmissionId::new(sha256_hex(combined.as_bytes())).ok()
}

/// Keeps a caller-supplied identifier, or derives one
///
/// # Errors
///
/// Returns [`PipelineInvariantViolation::MissingEmailDigest`] when an
/// identifier must be derived but there is no email digest.
pub fn resolve_submission_id(
    supplied: Option<&SubmissionId>,
    hashed_email: Option<&str>,
    now: DateTime<Utc>,
) -> Result<SubmissionId, PipelineInvariantViolation> {
    if let Some(id) = supplied {
        return Ok(id.clone());
    }
    derive_submission_id(hashed_email, now).ok_or(PipelineInvariantViolation::MissingEmailDigest)
}
