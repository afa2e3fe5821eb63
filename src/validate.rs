//! Field checks applied before a write is issued.
//!
//! Same rules the server's route layer enforces (presence, maximum length,
//! numeric format), run client-side so an obviously bad form never turns
//! into a round trip.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A field failed a client-side check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Value must be present and not blank.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying `message` when the value is blank.
pub fn require(field: &'static str, value: Option<&str>, message: &str) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new(field, message)),
    }
}

/// Value, when present, must be at most `max` characters.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying `message` when the value is too long.
pub fn max_length(field: &'static str, value: Option<&str>, max: usize, message: &str) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ValidationError::new(field, message)),
        _ => Ok(()),
    }
}

/// Value, when present, must be ASCII digits only.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying `message` when the value is not numeric.
pub fn numeric(field: &'static str, value: Option<&str>, message: &str) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.is_empty() || !v.chars().all(|c| c.is_ascii_digit()) => {
            Err(ValidationError::new(field, message))
        }
        _ => Ok(()),
    }
}

/// Value, when present, must look like a phone number: digits separated by
/// single dashes.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying `message` when the value is malformed.
pub fn phone(field: &'static str, value: Option<&str>, message: &str) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.split('-').all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())) => {
            Err(ValidationError::new(field, message))
        }
        _ => Ok(()),
    }
}
