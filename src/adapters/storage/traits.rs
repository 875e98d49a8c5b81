//! Record sink abstraction

use crate::domain::{Result, StoredRecord};

/// Destination for accepted records
///
/// Implementations must be safe to share between threads. A sink receives
/// finished records only and must not alter them.
pub trait RecordSink: Send + Sync {
    /// Persist one record
    ///
    /// # Errors
    ///
    /// Returns a storage error if the record cannot be written.
    fn append(&self, record: &StoredRecord) -> Result<()>;

    /// Human-readable destination, for log output
    fn describe(&self) -> String;
}
