//! Intake shape of a survey submission
//!
//! A [`SubmissionInput`] only exists after the validator accepted a raw
//! submission. It has no public constructor and no mutators.

use super::ids::SubmissionId;
use super::pii::{SecretAge, SecretEmail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Survey schema revision a submission is validated against
///
/// `V1` is the deprecated revision without the `source` field. `V2` is the
/// current revision. Records are never migrated between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Deprecated schema without `source`
    V1,
    /// Current schema with `source`
    #[default]
    V2,
}

impl SchemaVersion {
    /// Whether the `source` field is part of this schema
    pub fn has_source(&self) -> bool {
        matches!(self, Self::V2)
    }

    /// Whether this revision is deprecated
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::V1)
    }

    /// Returns the configuration name of the version
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            _ => Err(format!("Invalid schema version '{s}'. Must be one of: v1, v2")),
        }
    }
}

/// Where the respondent reached the survey from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Site homepage
    Homepage,
    /// Email campaign
    Email,
    /// Printed QR code
    Qr,
    /// Anything else, and the default when the field is omitted
    #[default]
    Other,
}

impl Source {
    /// All accepted literals, in declaration order
    pub const ALL: [Source; 4] = [Self::Homepage, Self::Email, Self::Qr, Self::Other];

    /// Returns the wire literal
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::Email => "email",
            Self::Qr => "qr",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    /// Exact, case-sensitive match against the four literals
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| format!("'{s}' is not one of: homepage, email, qr, other"))
    }
}

/// A validated survey submission in intake shape
///
/// Email and age are held as protected PII; `Debug` output redacts them.
#[derive(Debug, Clone)]
pub struct SubmissionInput {
    schema_version: SchemaVersion,
    name: String,
    email: SecretEmail,
    age: SecretAge,
    consent: bool,
    rating: u8,
    user_agent: Option<String>,
    comments: Option<String>,
    source: Option<Source>,
    submission_id: Option<SubmissionId>,
}

/// Field values gathered by the validator before freezing
pub(crate) struct SubmissionParts {
    pub schema_version: SchemaVersion,
    pub name: String,
    pub email: SecretEmail,
    pub age: SecretAge,
    pub rating: u8,
    pub user_agent: Option<String>,
    pub comments: Option<String>,
    pub source: Option<Source>,
    pub submission_id: Option<SubmissionId>,
}

impl SubmissionInput {
    /// Freezes validated parts. Consent is implied: the validator never gets
    /// here without it.
    pub(crate) fn from_parts(parts: SubmissionParts) -> Self {
        Self {
            schema_version: parts.schema_version,
            name: parts.name,
            email: parts.email,
            age: parts.age,
            consent: true,
            rating: parts.rating,
            user_agent: parts.user_agent,
            comments: parts.comments,
            source: parts.source,
            submission_id: parts.submission_id,
        }
    }

    /// Schema the submission was validated against
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Respondent name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical email address (protected)
    pub fn email(&self) -> &SecretEmail {
        &self.email
    }

    /// Age in years (protected)
    pub fn age(&self) -> &SecretAge {
        &self.age
    }

    /// Always true for a validated submission
    pub fn consent(&self) -> bool {
        self.consent
    }

    /// Rating between 1 and 5
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Free-form user agent
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Whitespace-stripped comments
    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    /// Traffic source; `None` only under the V1 schema
    pub fn source(&self) -> Option<Source> {
        self.source
    }

    /// Caller-supplied identifier, if any
    pub fn submission_id(&self) -> Option<&SubmissionId> {
        self.submission_id.as_ref()
    }
}
