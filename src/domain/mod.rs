/// Domain module containing the cycle data model and prediction engine
///
/// This module defines the core records (Cycle, Symptom, Mood), their
/// creation inputs and validation rules, and the pure functions that turn a
/// cycle history into forward predictions.

pub mod cycle;
pub mod symptom;
pub mod mood;
pub mod prediction;
pub mod types;

// Re-export public types for easy access
pub use cycle::*;
pub use symptom::*;
pub use mood::*;
pub use prediction::*;
pub use types::*;

use thiserror::Error;

/// Longest accepted free-text note
pub const MAX_NOTES_LEN: usize = 500;

/// Errors that can occur while validating user input
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}

/// Validate an optional notes field shared by every record kind
pub(crate) fn validate_notes(notes: &Option<String>) -> Result<(), DomainError> {
    if let Some(text) = notes {
        if text.chars().count() > MAX_NOTES_LEN {
            return Err(DomainError::InvalidValue {
                message: format!("Notes cannot be longer than {} characters", MAX_NOTES_LEN),
            });
        }
    }
    Ok(())
}
