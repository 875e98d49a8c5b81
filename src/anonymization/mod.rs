//! De-identification and identifier derivation
//!
//! This module is the second pipeline stage. Given a validated
//! [`SubmissionInput`](crate::domain::SubmissionInput) it:
//!
//! - **Digests** the email and age into lowercase hex SHA-256 ([`digest`])
//! - **Identifies** the submission, keeping a caller-supplied id or deriving
//!   one from the email digest and the UTC hour ([`identifier`])
//! - **Freezes** the result into a [`StoredRecord`](crate::domain::StoredRecord)
//!   ([`engine`])
//!
//! Hashing is one-way by intent; nothing here can map a digest back to the
//! original value. See [`digest`] for why the age digest is not a
//! confidentiality guarantee.

pub mod digest;
pub mod engine;
pub mod identifier;

// Re-export main entry points
pub use digest::{hash_age, hash_email, sha256_hex};
pub use engine::finalize;
pub use identifier::{derive_submission_id, hour_bucket};
