//! Submission identifier newtype
//!
//! A [`SubmissionId`] is either supplied by the caller or derived from the
//! hashed email and the UTC hour bucket. Either way it is never empty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Submission identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use survey_intake::domain::ids::SubmissionId;
/// use std::str::FromStr;
///
/// let id = SubmissionId::from_str("abc123").unwrap();
/// assert_eq!(id.as_str(), "abc123");
/// assert!(SubmissionId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubmissionId(String);

impl SubmissionId {
    /// Creates a new SubmissionId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(SubmissionId)` if the ID is non-empty, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("Submission ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the submission ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubmissionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SubmissionId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SubmissionId> for String {
    fn from(id: SubmissionId) -> Self {
        id.0
    }
}

impl AsRef<str> for SubmissionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
