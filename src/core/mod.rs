//! Core orchestration for survey-intake.
//!
//! # Modules
//!
//! - [`clock`] - Time source injected into the pipeline
//! - [`pipeline`] - Validate, anonymize, identify, and freeze one submission
//!
//! # Example
//!
//! ```rust
//! use survey_intake::core::{Outcome, SubmissionPipeline};
//! use survey_intake::domain::SchemaVersion;
//! use serde_json::json;
//!
//! let pipeline = SubmissionPipeline::new(SchemaVersion::V2);
//! let outcome = pipeline
//!     .process(&json!({"name": "Ada"}), "unknown")
//!     .expect("pipeline invariants hold");
//!
//! match outcome {
//!     Outcome::Accepted(record) => println!("stored {}", record.submission_id()),
//!     Outcome::Rejected(errors) => println!("rejected: {errors}"),
//! }
//! ```

pub mod clock;
pub mod pipeline;

pub use clock::{Clock, FixedClock, SystemClock};
pub use pipeline::{Outcome, SubmissionPipeline};
