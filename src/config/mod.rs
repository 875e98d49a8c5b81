//! Configuration management for survey-intake.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! The configuration file supports:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SURVEY_INTAKE_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use survey_intake::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("survey-intake.toml")?;
//!
//! println!("Schema version: {}", config.intake.schema_version);
//! println!("Records: {}", config.storage.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (name, log level)
//! - [`IntakeSettings`] - Schema version and default client address
//! - [`StorageConfig`] - JSON-lines record sink
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "survey-intake"
//! log_level = "info"
//!
//! [intake]
//! schema_version = "v2"
//! default_ip = "unknown"
//!
//! [storage]
//! enabled = true
//! output_path = "${SURVEY_INTAKE_DATA_DIR}/records.jsonl"
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{ApplicationConfig, IntakeConfig, IntakeSettings, LoggingConfig, StorageConfig};
