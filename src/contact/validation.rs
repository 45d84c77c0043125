use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

// Something, an @, something, a dot, something.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks the three required fields. Any missing or empty field wins over a
/// malformed email.
pub fn validate(
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
) -> Result<ContactMessage, ValidationError> {
    let (name, email, message) = match (name, email, message) {
        (Some(n), Some(e), Some(m)) if !n.is_empty() && !e.is_empty() && !m.is_empty() => (n, e, m),
        _ => return Err(ValidationError::MissingField),
    };
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(ContactMessage { name, email, message })
}
