//! Per-field validation rules
//!
//! Each function checks exactly one field of a raw submission and returns
//! either the normalized value or the single [`FieldIssue`] it violates.
//! The functions are independent of each other and of call order; the
//! validator runs all of them and collects every issue.
//!
//! Email and age are PII: their issues never carry the offending value.

use super::email::canonicalize_email;
use crate::domain::pii::{pii_age, pii_text, SecretAge, SecretEmail};
use crate::domain::{FieldIssue, IssueCode, SchemaVersion, Source, SubmissionId};
use serde_json::{Map, Value};

/// Outcome of checking one field
pub type FieldResult<T> = std::result::Result<T, FieldIssue>;

pub const NAME_MAX_CHARS: usize = 100;
pub const COMMENTS_MAX_CHARS: usize = 1000;
pub const AGE_MIN: i64 = 13;
pub const AGE_MAX: i64 = 120;
pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// Returns the field value, treating JSON `null` the same as absence
fn present<'a>(raw: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    raw.get(field).filter(|v| !v.is_null())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn missing(field: &'static str) -> FieldIssue {
    FieldIssue::new(field, IssueCode::Missing, format!("{field} is required"))
}

fn wrong_type(field: &'static str, expected: &str, value: &Value) -> FieldIssue {
    FieldIssue::new(
        field,
        IssueCode::TypeError,
        format!("{field} must be {expected}, got {}", json_type(value)),
    )
}

fn required_str<'a>(raw: &'a Map<String, Value>, field: &'static str) -> FieldResult<&'a str> {
    match present(raw, field) {
        None => Err(missing(field)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(wrong_type(field, "a string", other)),
    }
}

fn optional_str<'a>(
    raw: &'a Map<String, Value>,
    field: &'static str,
) -> FieldResult<Option<&'a str>> {
    match present(raw, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(wrong_type(field, "a string", other)),
    }
}

/// Integer in `[min, max]`. Floats and numeric strings are not coerced.
fn bounded_int(
    raw: &Map<String, Value>,
    field: &'static str,
    min: i64,
    max: i64,
    echo: bool,
) -> FieldResult<u8> {
    let value = present(raw, field).ok_or_else(|| missing(field))?;
    let number = match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => n.as_i64(),
        other => return Err(wrong_type(field, "an integer", other)),
    };

    let out_of_range = || {
        let issue = FieldIssue::new(
            field,
            IssueCode::OutOfRange,
            format!("{field} must be between {min} and {max}"),
        );
        if echo {
            issue.with_value(value.to_string())
        } else {
            issue
        }
    };

    // u64 values beyond i64::MAX arrive as None
    match number {
        Some(n) if (min..=max).contains(&n) => u8::try_from(n).map_err(|_| out_of_range()),
        _ => Err(out_of_range()),
    }
}

/// `name`: string of 1 to 100 characters, kept as typed
pub fn name(raw: &Map<String, Value>) -> FieldResult<String> {
    let name = required_str(raw, "name")?;
    let len = name.chars().count();

    if len == 0 {
        return Err(FieldIssue::new(
            "name",
            IssueCode::TooShort,
            "name must not be empty",
        ));
    }
    if len > NAME_MAX_CHARS {
        return Err(FieldIssue::new(
            "name",
            IssueCode::TooLong,
            format!("name must be at most {NAME_MAX_CHARS} characters (got {len})"),
        ));
    }

    Ok(name.to_string())
}

/// `email`: syntactically valid address, returned in canonical form
pub fn email(raw: &Map<String, Value>) -> FieldResult<SecretEmail> {
    let address = required_str(raw, "email")?;
    canonicalize_email(address)
        .map(pii_text)
        .map_err(|reason| FieldIssue::new("email", IssueCode::InvalidEmail, reason))
}

/// `age`: integer between 13 and 120
pub fn age(raw: &Map<String, Value>) -> FieldResult<SecretAge> {
    bounded_int(raw, "age", AGE_MIN, AGE_MAX, false).map(pii_age)
}

/// `consent`: must be exactly JSON `true`
pub fn consent(raw: &Map<String, Value>) -> FieldResult<()> {
    match raw.get("consent") {
        Some(Value::Bool(true)) => Ok(()),
        other => {
            let issue = FieldIssue::new(
                "consent",
                IssueCode::ConsentRequired,
                "consent must be explicitly true",
            );
            Err(match other {
                Some(value) => issue.with_value(value.to_string()),
                None => issue,
            })
        }
    }
}

/// `rating`: integer between 1 and 5
pub fn rating(raw: &Map<String, Value>) -> FieldResult<u8> {
    bounded_int(raw, "rating", RATING_MIN, RATING_MAX, true)
}

/// `user_agent`: optional free-form string
pub fn user_agent(raw: &Map<String, Value>) -> FieldResult<Option<String>> {
    optional_str(raw, "user_agent").map(|ua| ua.map(str::to_string))
}

/// `comments`: optional string, stripped, at most 1000 characters after stripping
pub fn comments(raw: &Map<String, Value>) -> FieldResult<Option<String>> {
    let Some(comments) = optional_str(raw, "comments")? else {
        return Ok(None);
    };

    let stripped = comments.trim();
    let len = stripped.chars().count();
    if len > COMMENTS_MAX_CHARS {
        return Err(FieldIssue::new(
            "comments",
            IssueCode::TooLong,
            format!("comments must be at most {COMMENTS_MAX_CHARS} characters (got {len})"),
        ));
    }

    Ok(Some(stripped.to_string()))
}

/// `source`: one of the enumerated literals, `other` when omitted
///
/// Only part of the V2 schema. Under V1 the field is ignored and no source
/// is recorded.
pub fn source(raw: &Map<String, Value>, version: SchemaVersion) -> FieldResult<Option<Source>> {
    if !version.has_source() {
        return Ok(None);
    }

    match present(raw, "source") {
        None => Ok(Some(Source::default())),
        Some(Value::String(s)) => s.parse::<Source>().map(Some).map_err(|message| {
            FieldIssue::new("source", IssueCode::InvalidChoice, message).with_value(s.as_str())
        }),
        Some(other) => Err(wrong_type("source", "a string", other)),
    }
}

/// `submission_id`: optional caller-supplied identifier; empty means absent
pub fn submission_id(raw: &Map<String, Value>) -> FieldResult<Option<SubmissionId>> {
    Ok(optional_str(raw, "submission_id")?.and_then(|id| SubmissionId::new(id).ok()))
}
