//! In-memory protection for plaintext PII
//!
//! Between validation and anonymization the email address and age exist in
//! plaintext. They are held in [`Secret`] containers so that:
//!
//! - memory is zeroed when the intake value is dropped
//! - `Debug` output is redacted, so logging a [`SubmissionInput`] is safe
//! - reading the value requires an explicit `expose_secret()`
//!
//! Neither type implements `Serialize`; plaintext PII can never reach a
//! serializer through them.
//!
//! [`SubmissionInput`]: crate::domain::SubmissionInput
//!
//! # Example
//!
//! ```rust
//! use survey_intake::domain::pii::pii_text;
//! use secrecy::ExposeSecret;
//!
//! let email = pii_text("ada@example.com".to_string());
//! assert_eq!(email.expose_secret().as_str(), "ada@example.com");
//! assert!(!format!("{email:?}").contains("ada"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Plaintext PII string (email address)
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct PiiText(String);

impl CloneableSecret for PiiText {}
impl DebugSecret for PiiText {}

impl PiiText {
    /// Borrows the plaintext
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PiiText {
    fn from(s: String) -> Self {
        PiiText(s)
    }
}

impl AsRef<str> for PiiText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Plaintext PII integer (age in years)
#[derive(Clone, Copy, Zeroize)]
pub struct PiiAge(u8);

impl CloneableSecret for PiiAge {}
impl DebugSecret for PiiAge {}

impl PiiAge {
    /// Returns the age in years
    pub fn years(&self) -> u8 {
        self.0
    }
}

impl From<u8> for PiiAge {
    fn from(years: u8) -> Self {
        PiiAge(years)
    }
}

/// Protected email address
pub type SecretEmail = Secret<PiiText>;

/// Protected age
pub type SecretAge = Secret<PiiAge>;

/// Wraps a plaintext string as protected PII
#[inline]
pub fn pii_text(value: String) -> SecretEmail {
    Secret::new(PiiText::from(value))
}

/// Wraps an age as protected PII
#[inline]
pub fn pii_age(years: u8) -> SecretAge {
    Secret::new(PiiAge::from(years))
}
