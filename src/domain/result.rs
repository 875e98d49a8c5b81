//! Result type alias for survey-intake
//!
//! Convenience alias that uses [`IntakeError`] as the error type for the
//! configuration, storage, and CLI layers.

use super::errors::IntakeError;

/// Result type alias for survey-intake operations
///
/// # Examples
///
/// ```
/// use survey_intake::domain::result::Result;
/// use survey_intake::domain::errors::IntakeError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(IntakeError::Storage("sink closed".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, IntakeError>;
