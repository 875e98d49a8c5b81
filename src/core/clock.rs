//! Wall-clock injection
//!
//! The only non-determinism in the pipeline is the current time, used for
//! `received_at` and the identifier hour bucket. [`SubmissionPipeline`]
//! reads it through [`Clock`] so tests can pin it.
//!
//! [`SubmissionPipeline`]: crate::core::pipeline::SubmissionPipeline

use chrono::{DateTime, Utc};

/// Source of the current UTC time
pub trait Clock: Send + Sync {
    /// Returns the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock pinned to `at`
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
