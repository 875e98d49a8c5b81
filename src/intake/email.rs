//! Email address syntax check and canonicalization
//!
//! Accepts `local-part@domain` where the local part is an RFC 5322 dot-atom
//! and the domain is a dotted hostname with an alphabetic TLD. Quoted local
//! parts, IP-literal domains, and internationalized addresses are rejected.
//!
//! The canonical form trims surrounding whitespace and lowercases the domain;
//! the local part is kept as typed because it may be case-sensitive.

use regex::Regex;
use std::sync::LazyLock;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

/// Dot-atom built from RFC 5322 `atext`.
static LOCAL_PART_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("local part regex is valid")
});

/// Hostname label: alphanumerics and inner hyphens, at most 63 characters.
static DOMAIN_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
        .expect("domain label regex is valid")
});

static TLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,63}$").expect("tld regex is valid"));

/// Parses an email address and returns its canonical form
///
/// # Errors
///
/// Returns a short reason when the address is malformed. The reason never
/// contains the address itself.
///
/// # Examples
///
/// ```
/// use survey_intake::intake::email::canonicalize_email;
///
/// assert_eq!(canonicalize_email(" Ada@Example.COM ").unwrap(), "Ada@example.com");
/// assert!(canonicalize_email("ada@localhost").is_err());
/// ```
pub fn canonicalize_email(raw: &str) -> Result<String, &'static str> {
    let address = raw.trim();

    if address.is_empty() {
        return Err("email address is empty");
    }
    if address.len() > MAX_ADDRESS_LEN {
        return Err("email address is too long");
    }

    let (local, domain) = address
        .rsplit_once('@')
        .ok_or("email address must contain '@'")?;

    if local.is_empty() {
        return Err("email local part is empty");
    }
    if local.len() > MAX_LOCAL_LEN {
        return Err("email local part is too long");
    }
    if !LOCAL_PART_REGEX.is_match(local) {
        return Err("email local part contains invalid characters");
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err("email domain must contain a dot");
    }
    if !labels.iter().all(|label| DOMAIN_LABEL_REGEX.is_match(label)) {
        return Err("email domain is not a valid hostname");
    }
    let tld = labels.last().copied().unwrap_or_default();
    if !TLD_REGEX.is_match(tld) {
        return Err("email domain has an invalid top-level domain");
    }

    Ok(format!("{local}@{}", domain.to_ascii_lowercase()))
}
