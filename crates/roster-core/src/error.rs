//! Error types for Roster core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-friendly messages. Absence is not an error: lookups return
//! `Option` so callers can branch on "no such record" without matching on
//! error variants, and no error is ever used for normal control flow.

use thiserror::Error;

/// Result type alias for Roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Malformed name, date, or salary input. Always recoverable: the
    /// caller re-prompts or skips the field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persistence backend failure during load or save.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Storage(err.to_string())
    }
}
