/// Symptom entity for logging how the body feels on a given day

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{validate_notes, DomainError, RecordId, Severity, SymptomKind};

/// A symptom observed on a specific day
///
/// Symptoms are independent of cycles; nothing links the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: RecordId,
    pub date: NaiveDate,
    /// Serialized as `type`
    #[serde(rename = "type")]
    pub kind: SymptomKind,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Symptom {
    pub fn new(input: SymptomInput) -> Self {
        Self {
            id: RecordId::new(),
            date: input.date,
            kind: input.kind.canonical(),
            severity: input.severity,
            notes: input.notes,
        }
    }
}

/// Data supplied by the caller when logging a symptom
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomInput {
    pub date: NaiveDate,
    pub kind: SymptomKind,
    pub severity: Severity,
    pub notes: Option<String>,
}

impl SymptomInput {
    pub fn new(date: NaiveDate, kind: SymptomKind, severity: Severity) -> Self {
        Self {
            date,
            kind,
            severity,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let SymptomKind::Custom(label) = &self.kind {
            if label.trim().is_empty() {
                return Err(DomainError::Validation {
                    message: "Symptom type cannot be empty".to_string(),
                });
            }
        }
        validate_notes(&self.notes)
    }
}
