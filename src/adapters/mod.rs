//! External system integrations for survey-intake.
//!
//! - [`storage`] - Record sinks receiving accepted [`StoredRecord`]s
//!
//! The pipeline itself performs no I/O. Adapters sit behind traits so the
//! CLI can be tested against temporary files.
//!
//! [`StoredRecord`]: crate::domain::StoredRecord

pub mod storage;
