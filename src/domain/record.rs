//! Persistence shape of a survey submission
//!
//! A [`StoredRecord`] carries digests in place of the plaintext email and
//! age, and always has a non-empty submission id. It is immutable once
//! built; the only way to make one is [`StoredRecordBuilder::build`], which
//! enforces both invariants.

use super::errors::PipelineInvariantViolation;
use super::ids::SubmissionId;
use super::submission::{SchemaVersion, Source};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An anonymized, identifier-bearing survey record ready for storage
///
/// # Examples
///
/// ```
/// use survey_intake::domain::record::StoredRecordBuilder;
/// use survey_intake::domain::ids::SubmissionId;
/// use chrono::Utc;
///
/// let record = StoredRecordBuilder::new()
///     .submission_id(SubmissionId::new("abc123").unwrap())
///     .received_at(Utc::now())
///     .ip("203.0.113.7")
///     .name("Ada")
///     .hashed_email("b5fc85e55755f9e0d030a10ab4429b6b2944855f9a0d60077fe832becbc41d72")
///     .hashed_age("624b60c58c9d8bfb6ff1886c2fd605d2adeb6ea4da576068201b6c6958ce93f4")
///     .rating(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(record.submission_id().as_str(), "abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    schema_version: SchemaVersion,
    submission_id: SubmissionId,
    received_at: DateTime<Utc>,
    ip: String,
    name: String,
    hashed_email: String,
    hashed_age: String,
    consent: bool,
    rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<Source>,
}

impl StoredRecord {
    /// Creates a new builder for constructing a StoredRecord
    pub fn builder() -> StoredRecordBuilder {
        StoredRecordBuilder::default()
    }

    /// Schema the submission was validated against
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Caller-supplied or derived identifier
    pub fn submission_id(&self) -> &SubmissionId {
        &self.submission_id
    }

    /// Server-side construction time
    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Client address supplied by the calling collaborator
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Respondent name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase hex SHA-256 of the canonical email
    pub fn hashed_email(&self) -> &str {
        &self.hashed_email
    }

    /// Lowercase hex SHA-256 of the decimal age
    pub fn hashed_age(&self) -> &str {
        &self.hashed_age
    }

    /// Consent flag carried from intake
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

    /// Traffic source; absent on V1 records
    pub fn source(&self) -> Option<Source> {
        self.source
    }
}

/// Builder for constructing StoredRecord instances
#[derive(Debug)]
pub struct StoredRecordBuilder {
    schema_version: SchemaVersion,
    submission_id: Option<SubmissionId>,
    received_at: Option<DateTime<Utc>>,
    ip: Option<String>,
    name: Option<String>,
    hashed_email: Option<String>,
    hashed_age: Option<String>,
    consent: bool,
    rating: Option<u8>,
    user_agent: Option<String>,
    comments: Option<String>,
    source: Option<Source>,
}

impl Default for StoredRecordBuilder {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            submission_id: None,
            received_at: None,
            ip: None,
            name: None,
            hashed_email: None,
            hashed_age: None,
            consent: true,
            rating: None,
            user_agent: None,
            comments: None,
            source: None,
        }
    }
}

impl StoredRecordBuilder {
    /// Creates a new StoredRecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema version
    pub fn schema_version(mut self, version: SchemaVersion) -> Self {
        self.schema_version = version;
        self
    }

    /// Sets the submission id
    pub fn submission_id(mut self, id: SubmissionId) -> Self {
        self.submission_id = Some(id);
        self
    }

    /// Sets the reception timestamp
    pub fn received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = Some(received_at);
        self
    }

    /// Sets the client address
    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Sets the respondent name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email digest
    pub fn hashed_email(mut self, digest: impl Into<String>) -> Self {
        self.hashed_email = Some(digest.into());
        self
    }

    /// Sets the age digest
    pub fn hashed_age(mut self, digest: impl Into<String>) -> Self {
        self.hashed_age = Some(digest.into());
        self
    }

    /// Sets the consent flag
    pub fn consent(mut self, consent: bool) -> Self {
        self.consent = consent;
        self
    }

    /// Sets the rating
    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the user agent
    pub fn user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Sets the comments
    pub fn comments(mut self, comments: Option<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Sets the source
    pub fn source(mut self, source: Option<Source>) -> Self {
        self.source = source;
        self
    }

    /// Builds the StoredRecord
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineInvariantViolation`] if the submission id, either
    /// digest, or any other required field is missing or empty.
    pub fn build(self) -> Result<StoredRecord, PipelineInvariantViolation> {
        let submission_id = self
            .submission_id
            .ok_or(PipelineInvariantViolation::MissingField("submission_id"))?;
        if submission_id.as_str().is_empty() {
            return Err(PipelineInvariantViolation::EmptySubmissionId);
        }

        let hashed_email = self
            .hashed_email
            .filter(|d| !d.is_empty())
            .ok_or(PipelineInvariantViolation::MissingField("hashed_email"))?;
        let hashed_age = self
            .hashed_age
            .filter(|d| !d.is_empty())
            .ok_or(PipelineInvariantViolation::MissingField("hashed_age"))?;

        Ok(StoredRecord {
            schema_version: self.schema_version,
            submission_id,
            received_at: self
                .received_at
                .ok_or(PipelineInvariantViolation::MissingField("received_at"))?,
            ip: self.ip.ok_or(PipelineInvariantViolation::MissingField("ip"))?,
            name: self
                .name
                .ok_or(PipelineInvariantViolation::MissingField("name"))?,
            hashed_email,
            hashed_age,
            consent: self.consent,
            rating: self
                .rating
                .ok_or(PipelineInvariantViolation::MissingField("rating"))?,
            user_agent: self.user_agent,
            comments: self.comments,
            source: self.source,
        })
    }
}
