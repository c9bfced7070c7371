//! Domain error model.

use thiserror::Error;

/// Result type used across the record layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures that are detected before any
/// network call (validation, broken references). Transport failures belong to
/// the client crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation (required field missing, value out of range).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A record points at another record that is missing or inactive.
    #[error("broken reference: {0}")]
    BrokenReference(String),

    /// An identifier was invalid (e.g. empty string).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn broken_reference(msg: impl Into<String>) -> Self {
        Self::BrokenReference(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Fail validation when a required text field is blank.
pub fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}
