/// Mood entity for tracking emotional state and energy

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{validate_notes, DomainError, MoodKind, RecordId};

/// Lowest accepted energy rating
pub const MIN_ENERGY: u8 = 1;
/// Highest accepted energy rating
pub const MAX_ENERGY: u8 = 10;

/// A mood and energy reading for a specific day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
    pub id: RecordId,
    pub date: NaiveDate,
    pub mood: MoodKind,
    /// Energy rating from 1 to 10
    pub energy: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Mood {
    pub fn new(input: MoodInput) -> Self {
        Self {
            id: RecordId::new(),
            date: input.date,
            mood: input.mood.canonical(),
            energy: input.energy,
            notes: input.notes,
        }
    }
}

/// Data supplied by the caller when logging a mood
#[derive(Debug, Clone, PartialEq)]
pub struct MoodInput {
    pub date: NaiveDate,
    pub mood: MoodKind,
    pub energy: u8,
    pub notes: Option<String>,
}

impl MoodInput {
    pub fn new(date: NaiveDate, mood: MoodKind, energy: u8) -> Self {
        Self {
            date,
            mood,
            energy,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !(MIN_ENERGY..=MAX_ENERGY).contains(&self.energy) {
            return Err(DomainError::InvalidValue {
                message: format!(
                    "Energy must be between {} and {}, got {}",
                    MIN_ENERGY, MAX_ENERGY, self.energy
                ),
            });
        }
        validate_notes(&self.notes)
    }
}
