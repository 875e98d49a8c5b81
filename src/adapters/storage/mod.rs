//! Record storage
//!
//! Only [`StoredRecord`](crate::domain::StoredRecord) values can be written;
//! intake values never reach a sink.

pub mod jsonl;
pub mod traits;

pub use jsonl::JsonLinesSink;
pub use traits::RecordSink;
