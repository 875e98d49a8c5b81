//! Append-only JSON-lines sink

use super::traits::RecordSink;
use crate::domain::{IntakeError, Result, StoredRecord};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Writes one serialized [`StoredRecord`] per line
///
/// # Examples
///
/// ```no_run
/// use survey_intake::adapters::storage::{JsonLinesSink, RecordSink};
///
/// let sink = JsonLinesSink::new("./data/records.jsonl").expect("sink");
/// println!("writing to {}", sink.describe());
/// ```
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonLinesSink {
    /// Creates a sink, creating the parent directory if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                IntakeError::Storage(format!(
                    "Failed to create record directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Target file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for JsonLinesSink {
    fn append(&self, record: &StoredRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| IntakeError::Storage("record sink lock poisoned".to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                IntakeError::Storage(format!(
                    "Failed to open record file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{line}").map_err(|e| {
            IntakeError::Storage(format!(
                "Failed to append record to {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            submission_id = %record.submission_id(),
            path = %self.path.display(),
            "Record appended"
        );

        Ok(())
    }

    fn describe(&self) -> String {
        format!("jsonl:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SchemaVersion, Source, SubmissionId};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn record(id: &str) -> StoredRecord {
        StoredRecord::builder()
            .schema_version(SchemaVersion::V2)
            .submission_id(SubmissionId::new(id).unwrap())
            .received_at(Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap())
            .ip("203.0.113.7")
            .name("Ada")
            .hashed_email("b5fc85e55755f9e0d030a10ab4429b6b2944855f9a0d60077fe832becbc41d72")
            .hashed_age("624b60c58c9d8bfb6ff1886c2fd605d2adeb6ea4da576068201b6c6958ce93f4")
            .rating(5)
            .source(Some(Source::Other))
            .build()
            .unwrap()
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("records.jsonl");

        let sink = JsonLinesSink::new(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn test_appends_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.jsonl");
        let sink = JsonLinesSink::new(&path).unwrap();

        sink.append(&record("first")).unwrap();
        sink.append(&record("second")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: StoredRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed, record("second"));
    }

    #[test]
    fn test_concurrent_appends_do_not_interleave() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.jsonl");
        let sink = Arc::new(JsonLinesSink::new(&path).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || sink.append(&record(&format!("id-{i}"))).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        for line in contents.lines() {
            serde_json::from_str::<StoredRecord>(line).unwrap();
        }
        assert_eq!(contents.lines().count(), 8);
    }

    #[test]
    fn test_describe() {
        let dir = TempDir::new().unwrap();
        let sink = JsonLinesSink::new(dir.path().join("r.jsonl")).unwrap();
        assert!(sink.describe().starts_with("jsonl:"));
    }
}
