//! One-way digests for PII fields
//!
//! Every digest is SHA-256 rendered as 64 lowercase hex characters.
//!
//! # Limitations
//!
//! The email digest is unsalted, so anyone holding a candidate address can
//! confirm it against a stored record. The age digest is weaker still: there
//! are only 108 valid ages, and every one of their digests can be
//! precomputed in microseconds. `hashed_age` is obfuscation against casual
//! reading, not confidentiality.

use crate::domain::pii::{SecretAge, SecretEmail};
use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};

/// SHA-256 of `bytes` as lowercase hex
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    format!("{result:x}")
}

/// Digest of the canonical email address
pub fn hash_email(email: &SecretEmail) -> String {
    sha256_hex(email.expose_secret().as_str().as_bytes())
}

/// Digest of the age rendered as a base-10 string
pub fn hash_age(age: &SecretAge) -> String {
    sha256_hex(age.expose_secret().years().to_string().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pii::{pii_age, pii_text};

    #[test]
    fn test_sha256_known_vectors() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex(b"ada@example.com"),
            "b5fc85e55755f9e0d030a10ab4429b6b2944855f9a0d60077fe832becbc41d72"
        );
    }

    #[test]
    fn test_hash_age_uses_decimal_string() {
        assert_eq!(hash_age(&pii_age(30)), sha256_hex(b"30"));
        assert_eq!(
            hash_age(&pii_age(30)),
            "624b60c58c9d8bfb6ff1886c2fd605d2adeb6ea4da576068201b6c6958ce93f4"
        );
    }

    #[test]
    fn test_hash_email_is_deterministic() {
        let a = hash_email(&pii_text("ada@example.com".to_string()));
        let b = hash_email(&pii_text("ada@example.com".to_string()));
        let c = hash_email(&pii_text("grace@example.com".to_string()));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
    }

    #[test]
    fn test_age_space_is_enumerable() {
        let target = hash_age(&pii_age(57));
        let recovered = (13u8..=120).find(|age| sha256_hex(age.to_string().as_bytes()) == target);
        assert_eq!(recovered, Some(57));
    }
}
