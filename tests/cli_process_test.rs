//! Integration tests for the process and check commands

use std::fs;
use std::path::{Path, PathBuf};
use survey_intake::cli::commands::check::CheckArgs;
use survey_intake::cli::commands::process::ProcessArgs;
use survey_intake::cli::commands::{EXIT_CONFIG, EXIT_OK, EXIT_REJECTED};
use survey_intake::domain::StoredRecord;
use tempfile::TempDir;

const ADA: &str = r#"{"name":"Ada","email":"ada@example.com","age":30,"consent":true,"rating":5}"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> String {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().to_string()
    }

    fn config(&self) -> String {
        let records = self.path("data").join("records.jsonl");
        self.write(
            "survey-intake.toml",
            &format!(
                "[intake]\ndefault_ip = \"192.0.2.10\"\n\n[storage]\noutput_path = \"{}\"\n",
                records.display()
            ),
        )
    }

    fn records(&self) -> Vec<StoredRecord> {
        read_records(&self.path("data").join("records.jsonl"))
    }
}

fn read_records(path: &Path) -> Vec<StoredRecord> {
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn process(input: String) -> ProcessArgs {
    ProcessArgs {
        input,
        ip: None,
        now: Some("2024-03-01T10:15:00Z".to_string()),
        output: None,
    }
}

#[tokio::test]
async fn test_process_accepted_is_stored() {
    let ws = Workspace::new();
    let config = ws.config();
    let input = ws.write("ada.json", ADA);

    let code = process(input).execute(&config).await.unwrap();
    assert_eq!(code, EXIT_OK);

    let records = ws.records();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].submission_id().as_str(),
        "1da56d540dee556b3de1130d8fadec95ce2df6f5f3c466a560e553c45b3f1a42"
    );
    assert_eq!(records[0].ip(), "192.0.2.10");
}

#[tokio::test]
async fn test_process_ip_flag_wins() {
    let ws = Workspace::new();
    let config = ws.config();
    let mut args = process(ws.write("ada.json", ADA));
    args.ip = Some("203.0.113.7".to_string());

    assert_eq!(args.execute(&config).await.unwrap(), EXIT_OK);
    assert_eq!(ws.records()[0].ip(), "203.0.113.7");
}

#[tokio::test]
async fn test_process_rejected_stores_nothing() {
    let ws = Workspace::new();
    let config = ws.config();
    let input = ws.write("bad.json", r#"{"name":"Ada","consent":false}"#);

    let code = process(input).execute(&config).await.unwrap();
    assert_eq!(code, EXIT_REJECTED);
    assert!(ws.records().is_empty());
}

#[tokio::test]
async fn test_process_malformed_json_rejected() {
    let ws = Workspace::new();
    let config = ws.config();
    let input = ws.write("broken.json", "{\"name\": ");

    assert_eq!(process(input).execute(&config).await.unwrap(), EXIT_REJECTED);
}

#[tokio::test]
async fn test_process_output_flag_overrides_config() {
    let ws = Workspace::new();
    let config = ws.config();
    let output = ws.path("elsewhere").join("out.jsonl");

    let mut args = process(ws.write("ada.json", ADA));
    args.output = Some(output.clone());

    assert_eq!(args.execute(&config).await.unwrap(), EXIT_OK);
    assert_eq!(read_records(&output).len(), 1);
    assert!(ws.records().is_empty());
}

#[tokio::test]
async fn test_process_appends() {
    let ws = Workspace::new();
    let config = ws.config();
    let input = ws.write("ada.json", ADA);

    for _ in 0..3 {
        assert_eq!(process(input.clone()).execute(&config).await.unwrap(), EXIT_OK);
    }
    assert_eq!(ws.records().len(), 3);
}

#[tokio::test]
async fn test_process_invalid_now_is_config_error() {
    let ws = Workspace::new();
    let config = ws.config();
    let mut args = process(ws.write("ada.json", ADA));
    args.now = Some("10:15 yesterday".to_string());

    assert_eq!(args.execute(&config).await.unwrap(), EXIT_CONFIG);
}

#[tokio::test]
async fn test_process_invalid_config_file() {
    let ws = Workspace::new();
    let config = ws.write("survey-intake.toml", "[intake]\nschema_version = \"v7\"\n");
    let args = process(ws.write("ada.json", ADA));

    assert_eq!(args.execute(&config).await.unwrap(), EXIT_CONFIG);
}

#[tokio::test]
async fn test_process_missing_input_is_error() {
    let ws = Workspace::new();
    let config = ws.config();
    let args = process(ws.path("absent.json").to_string_lossy().to_string());

    assert!(args.execute(&config).await.is_err());
}

#[tokio::test]
async fn test_check_does_not_store() {
    let ws = Workspace::new();
    let config = ws.config();
    let args = CheckArgs {
        input: ws.write("ada.json", ADA),
    };

    assert_eq!(args.execute(&config).await.unwrap(), EXIT_OK);
    assert!(ws.records().is_empty());
}
