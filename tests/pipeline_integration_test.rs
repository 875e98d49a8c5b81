//! End-to-end tests for the submission pipeline

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use survey_intake::core::{FixedClock, Outcome, SubmissionPipeline};
use survey_intake::domain::{IssueCode, SchemaVersion, Source, StoredRecord};
use test_case::test_case;

const ADA_EMAIL_DIGEST: &str = "b5fc85e55755f9e0d030a10ab4429b6b2944855f9a0d60077fe832becbc41d72";
const AGE_30_DIGEST: &str = "624b60c58c9d8bfb6ff1886c2fd605d2adeb6ea4da576068201b6c6958ce93f4";
const ADA_ID_10H: &str = "1da56d540dee556b3de1130d8fadec95ce2df6f5f3c466a560e553c45b3f1a42";
const ADA_ID_11H: &str = "81beb9b0e71d5f3dc5a6f0fe194c15cfe21732fc627f743d3682c1bba6321ba5";

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
}

fn pipeline_at(now: DateTime<Utc>) -> SubmissionPipeline<FixedClock> {
    SubmissionPipeline::with_clock(SchemaVersion::V2, FixedClock::new(now))
}

/// Minimal valid submission
fn ada() -> Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "age": 30,
        "consent": true,
        "rating": 5
    })
}

fn accept(pipeline: &SubmissionPipeline<FixedClock>, raw: &Value) -> StoredRecord {
    pipeline
        .process(raw, "203.0.113.7")
        .unwrap()
        .into_result()
        .unwrap()
}

#[test]
fn test_reference_submission() {
    let record = accept(&pipeline_at(at(10, 15)), &ada());

    assert_eq!(record.schema_version(), SchemaVersion::V2);
    assert_eq!(record.submission_id().as_str(), ADA_ID_10H);
    assert_eq!(record.received_at(), at(10, 15));
    assert_eq!(record.ip(), "203.0.113.7");
    assert_eq!(record.name(), "Ada");
    assert_eq!(record.hashed_email(), ADA_EMAIL_DIGEST);
    assert_eq!(record.hashed_age(), AGE_30_DIGEST);
    assert!(record.consent());
    assert_eq!(record.rating(), 5);
    assert_eq!(record.source(), Some(Source::Other));
    assert!(record.user_agent().is_none());
    assert!(record.comments().is_none());
}

#[test]
fn test_same_hour_same_id() {
    let first = accept(&pipeline_at(at(10, 0)), &ada());
    let second = accept(&pipeline_at(at(10, 59)), &ada());
    assert_eq!(first.submission_id(), second.submission_id());
}

#[test]
fn test_next_hour_new_id() {
    let first = accept(&pipeline_at(at(10, 59)), &ada());
    let second = accept(&pipeline_at(at(11, 0)), &ada());
    assert_eq!(first.submission_id().as_str(), ADA_ID_10H);
    assert_eq!(second.submission_id().as_str(), ADA_ID_11H);
}

#[test]
fn test_processing_is_deterministic() {
    let pipeline = pipeline_at(at(10, 15));
    assert_eq!(accept(&pipeline, &ada()), accept(&pipeline, &ada()));
}

#[test]
fn test_caller_submission_id_kept() {
    let mut raw = ada();
    raw["submission_id"] = json!("abc123");

    let record = accept(&pipeline_at(at(10, 15)), &raw);
    assert_eq!(record.submission_id().as_str(), "abc123");
}

#[test]
fn test_empty_caller_submission_id_is_derived() {
    let mut raw = ada();
    raw["submission_id"] = json!("");

    let record = accept(&pipeline_at(at(10, 15)), &raw);
    assert_eq!(record.submission_id().as_str(), ADA_ID_10H);
}

#[test]
fn test_email_whitespace_and_domain_case_do_not_change_digest() {
    let mut raw = ada();
    raw["email"] = json!("  ada@EXAMPLE.com ");

    let record = accept(&pipeline_at(at(10, 15)), &raw);
    assert_eq!(record.hashed_email(), ADA_EMAIL_DIGEST);
    assert_eq!(record.submission_id().as_str(), ADA_ID_10H);
}

#[test]
fn test_optional_fields_carried() {
    let mut raw = ada();
    raw["user_agent"] = json!("Mozilla/5.0");
    raw["comments"] = json!("   great survey  ");
    raw["source"] = json!("qr");

    let record = accept(&pipeline_at(at(10, 15)), &raw);
    assert_eq!(record.user_agent(), Some("Mozilla/5.0"));
    assert_eq!(record.comments(), Some("great survey"));
    assert_eq!(record.source(), Some(Source::Qr));
}

#[test]
fn test_v1_schema_records_no_source() {
    let pipeline = SubmissionPipeline::with_clock(SchemaVersion::V1, FixedClock::new(at(10, 15)));
    let mut raw = ada();
    raw["source"] = json!("homepage");

    let record = accept(&pipeline, &raw);
    assert_eq!(record.schema_version(), SchemaVersion::V1);
    assert_eq!(record.source(), None);

    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("source").is_none());
    assert_eq!(json["schema_version"], "v1");
}

#[test]
fn test_rejection_lists_every_issue() {
    let raw = json!({
        "name": "",
        "email": "not-an-email",
        "age": 9,
        "consent": "yes",
        "rating": 10,
        "comments": "x".repeat(1001),
        "source": "billboard"
    });

    let outcome = pipeline_at(at(10, 15)).process(&raw, "203.0.113.7").unwrap();
    let Outcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };

    assert_eq!(errors.len(), 7);
    assert!(errors.has_code("name", IssueCode::TooShort));
    assert!(errors.has_code("email", IssueCode::InvalidEmail));
    assert!(errors.has_code("age", IssueCode::OutOfRange));
    assert!(errors.has_code("consent", IssueCode::ConsentRequired));
    assert!(errors.has_code("rating", IssueCode::OutOfRange));
    assert!(errors.has_code("comments", IssueCode::TooLong));
    assert!(errors.has_code("source", IssueCode::InvalidChoice));
}

#[test]
fn test_rejection_never_echoes_email_or_age() {
    let raw = json!({
        "name": "Ada",
        "email": "ada-at-example.com",
        "age": 7,
        "consent": true,
        "rating": 5
    });

    let errors = pipeline_at(at(10, 15))
        .process(&raw, "203.0.113.7")
        .unwrap()
        .into_result()
        .unwrap_err();

    let rendered = serde_json::to_string(errors.issues()).unwrap();
    assert!(!rendered.contains("ada-at-example.com"));
    assert!(errors
        .issues()
        .iter()
        .filter(|issue| issue.field == "age" || issue.field == "email")
        .all(|issue| issue.value.is_none()));
}

#[test_case("age", 13, true ; "age lower bound")]
#[test_case("age", 120, true ; "age upper bound")]
#[test_case("age", 12, false ; "age below lower bound")]
#[test_case("age", 121, false ; "age above upper bound")]
#[test_case("rating", 1, true ; "rating lower bound")]
#[test_case("rating", 5, true ; "rating upper bound")]
#[test_case("rating", 0, false ; "rating below lower bound")]
#[test_case("rating", 6, false ; "rating above upper bound")]
fn test_numeric_boundaries(field: &str, value: i64, accepted: bool) {
    let mut raw = ada();
    raw[field] = json!(value);

    let outcome = pipeline_at(at(10, 15)).process(&raw, "203.0.113.7").unwrap();
    assert_eq!(outcome.is_accepted(), accepted);
    if !accepted {
        let errors = outcome.errors().unwrap();
        assert_eq!(errors.fields(), vec![field]);
    }
}

#[test_case(100, true ; "name at limit")]
#[test_case(101, false ; "name over limit")]
fn test_name_length_boundary(len: usize, accepted: bool) {
    let mut raw = ada();
    raw["name"] = json!("é".repeat(len));

    let outcome = pipeline_at(at(10, 15)).process(&raw, "203.0.113.7").unwrap();
    assert_eq!(outcome.is_accepted(), accepted);
}

#[test]
fn test_pipeline_shared_across_threads() {
    let pipeline = std::sync::Arc::new(pipeline_at(at(10, 15)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pipeline = std::sync::Arc::clone(&pipeline);
            std::thread::spawn(move || accept(&pipeline, &ada()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().submission_id().as_str(), ADA_ID_10H);
    }
}
