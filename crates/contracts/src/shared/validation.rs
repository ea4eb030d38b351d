//! Form validation helpers.
//!
//! The add forms only check that required fields are present. The format
//! checks below are available to callers but not enforced by the forms.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be a date in YYYY-MM-DD form")]
    InvalidDate { field: &'static str },
}

/// Checks that every `(label, value)` pair has a non-blank value.
/// Reports the first missing field.
pub fn require_fields(fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(FormError::MissingField { field: *field }),
        None => Ok(()),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts up to 16 digits with an optional leading `+`; whitespace is ignored
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}
