// Survey Intake - Privacy-Preserving Survey Submission Pipeline
// Copyright (c) 2025 Survey Intake Contributors
// Licensed under the MIT License

//! # Survey Intake
//!
//! Survey Intake turns raw survey submissions into anonymized, storage-ready
//! records. Email addresses and ages are replaced by SHA-256 digests before
//! anything leaves the pipeline.
//!
//! ## Overview
//!
//! Each submission passes through four stages:
//! - **Validating** every field and collecting all issues at once
//! - **Anonymizing** email and age into lowercase hex digests
//! - **Identifying** the submission with a caller id or an hour-bucketed digest
//! - **Freezing** the result into an immutable [`domain::StoredRecord`]
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pipeline orchestration and clock injection
//! - [`intake`] - Field validation and email canonicalization
//! - [`anonymization`] - Digests, identifiers, and record finalization
//! - [`adapters`] - Record sinks
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use survey_intake::core::SubmissionPipeline;
//! use survey_intake::domain::SchemaVersion;
//! use serde_json::json;
//!
//! let pipeline = SubmissionPipeline::new(SchemaVersion::V2);
//! let raw = json!({
//!     "name": "Ada",
//!     "email": "ada@example.com",
//!     "age": 30,
//!     "consent": true,
//!     "rating": 5
//! });
//!
//! let record = pipeline
//!     .process(&raw, "203.0.113.7")
//!     .expect("pipeline invariants hold")
//!     .into_result()
//!     .expect("submission is valid");
//!
//! assert_eq!(
//!     record.hashed_email(),
//!     "b5fc85e55755f9e0d030a10ab4429b6b2944855f9a0d60077fe832becbc41d72"
//! );
//! ```
//!
//! ## Error Handling
//!
//! Rejections are values, not errors: [`core::Outcome::Rejected`] carries a
//! [`domain::ValidationErrors`] listing every issue. [`domain::IntakeError`]
//! covers configuration, storage, and I/O failures around the pipeline.
//!
//! ```rust,no_run
//! use survey_intake::domain::IntakeError;
//!
//! fn example() -> Result<(), IntakeError> {
//!     let config = survey_intake::config::load_config("survey-intake.toml")?;
//!     println!("{}", config.intake.schema_version);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod intake;
pub mod logging;
