//! Submission validation
//!
//! [`validate`] turns a raw JSON submission into a [`SubmissionInput`] or a
//! [`ValidationErrors`] listing every violated constraint. Every field is
//! checked by its own function in [`fields`]; nothing short-circuits, so a
//! caller gets the complete list of problems in one pass.
//!
//! # Example
//!
//! ```rust
//! use survey_intake::intake::validate;
//! use survey_intake::domain::{IssueCode, SchemaVersion};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "name": "Ada",
//!     "email": "ada@example.com",
//!     "age": 200,
//!     "consent": false,
//!     "rating": 5
//! });
//!
//! let errors = validate(&raw, SchemaVersion::V2).unwrap_err();
//! assert!(errors.has_code("age", IssueCode::OutOfRange));
//! assert!(errors.has_code("consent", IssueCode::ConsentRequired));
//! ```

pub mod email;
pub mod fields;

use crate::domain::submission::SubmissionParts;
use crate::domain::{FieldIssue, IssueCode, SchemaVersion, SubmissionInput, ValidationErrors};
use fields::FieldResult;
use serde_json::Value;

/// Keeps a field's value, or records its issue and yields nothing
fn keep<T>(result: FieldResult<T>, issues: &mut Vec<FieldIssue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

/// Validates a raw submission against a schema revision
///
/// `raw` must be a JSON object. Fields are checked in the order `name`,
/// `email`, `age`, `consent`, `rating`, `user_agent`, `comments`, `source`,
/// `submission_id`; issues are reported in that order. Unknown fields are
/// ignored.
///
/// # Errors
///
/// Returns [`ValidationErrors`] with at least one issue if any field is
/// invalid. No partial value is produced.
pub fn validate(raw: &Value, version: SchemaVersion) -> Result<SubmissionInput, ValidationErrors> {
    let Value::Object(obj) = raw else {
        return Err(ValidationErrors::new(vec![FieldIssue::new(
            "body",
            IssueCode::TypeError,
            "submission must be a JSON object",
        )]));
    };

    tracing::debug!(
        schema_version = %version,
        field_count = obj.len(),
        "Validating submission"
    );

    let mut issues = Vec::new();
    let name = keep(fields::name(obj), &mut issues);
    let email = keep(fields::email(obj), &mut issues);
    let age = keep(fields::age(obj), &mut issues);
    let consent = keep(fields::consent(obj), &mut issues);
    let rating = keep(fields::rating(obj), &mut issues);
    let user_agent = keep(fields::user_agent(obj), &mut issues);
    let comments = keep(fields::comments(obj), &mut issues);
    let source = keep(fields::source(obj, version), &mut issues);
    let submission_id = keep(fields::submission_id(obj), &mut issues);

    let (
        Some(name),
        Some(email),
        Some(age),
        Some(()),
        Some(rating),
        Some(user_agent),
        Some(comments),
        Some(source),
        Some(submission_id),
    ) = (
        name,
        email,
        age,
        consent,
        rating,
        user_agent,
        comments,
        source,
        submission_id,
    )
    else {
        tracing::debug!(issue_count = issues.len(), "Submission failed validation");
        return Err(ValidationErrors::new(issues));
    };

    Ok(SubmissionInput::from_parts(SubmissionParts {
        schema_version: version,
        name,
        email,
        age,
        rating,
        user_agent,
        comments,
        source,
        submission_id,
    }))
}
