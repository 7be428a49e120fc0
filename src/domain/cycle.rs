/// Cycle entity and its creation input
///
/// A cycle is one recorded period: a start date, an optional end date and
/// the flow intensity. Cycles are immutable once created.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{validate_notes, DomainError, Flow, RecordId};

/// One recorded period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    /// Unique identifier for this cycle
    pub id: RecordId,
    /// First day of the period
    pub start_date: NaiveDate,
    /// Last day of the period, if it has been recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Days between start and end, 0 when the end is unknown
    pub duration: i64,
    pub flow: Flow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Cycle {
    /// Build a cycle from user input, assigning a fresh id and deriving
    /// the duration
    pub fn new(input: CycleInput) -> Self {
        let duration = input
            .end_date
            .map(|end| (end - input.start_date).num_days())
            .unwrap_or(0);

        Self {
            id: RecordId::new(),
            start_date: input.start_date,
            end_date: input.end_date,
            duration,
            flow: input.flow,
            notes: input.notes,
        }
    }

    /// Whether the end of this period has been recorded
    pub fn is_complete(&self) -> bool {
        self.end_date.is_some()
    }

    /// Length of the period in days, measured from the dates themselves
    pub fn period_length(&self) -> Option<i64> {
        self.end_date.map(|end| (end - self.start_date).num_days())
    }
}

/// Data supplied by the caller when recording a cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleInput {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub flow: Flow,
    pub notes: Option<String>,
}

impl CycleInput {
    /// Input for an open cycle with medium flow and no notes
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: None,
            flow: Flow::default(),
            notes: None,
        }
    }

    pub fn ending(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check the input before it is handed to the store
    ///
    /// The store itself accepts anything; this is for callers that gather
    /// input from users.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(DomainError::InvalidDate(format!(
                    "End date {} is before start date {}",
                    end, self.start_date
                )));
            }
        }
        validate_notes(&self.notes)
    }
}
