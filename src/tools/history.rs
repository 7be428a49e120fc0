/// Tool for listing recorded history
///
/// This module implements the cycle_history MCP tool.

use serde::{Deserialize, Serialize};
use crate::analytics::{ForecastEngine, HistorySummary};
use crate::domain::{Cycle, Mood, Symptom};
use crate::storage::SlotStorage;
use crate::store::CycleStore;
use crate::tools::{non_blank, ToolError};

/// Parameters for listing history
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HistoryParams {
    pub collection: Option<String>, // "cycles", "symptoms", "moods" or "all" (default)
    pub limit: Option<usize>,
}

/// Which collections a history request covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryScope {
    Cycles,
    Symptoms,
    Moods,
    All,
}

impl HistoryScope {
    fn includes(&self, other: HistoryScope) -> bool {
        *self == HistoryScope::All || *self == other
    }
}

/// Response from listing history, newest added first
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub cycles: Vec<Cycle>,
    pub symptoms: Vec<Symptom>,
    pub moods: Vec<Mood>,
    pub summary: HistorySummary,
    pub message: String,
}

/// List recorded history from the store
pub fn list_history<S: SlotStorage>(
    store: &CycleStore<S>,
    params: HistoryParams,
) -> Result<HistoryResponse, ToolError> {
    let scope = match non_blank(params.collection).map(|s| s.trim().to_lowercase()) {
        None => HistoryScope::All,
        Some(s) => match s.as_str() {
            "all" => HistoryScope::All,
            "cycles" => HistoryScope::Cycles,
            "symptoms" => HistoryScope::Symptoms,
            "moods" => HistoryScope::Moods,
            _ => {
                return Err(ToolError::InvalidArgument {
                    field: "collection",
                    message: format!("Invalid collection '{}'. Valid options: cycles, symptoms, moods, all", s),
                })
            }
        },
    };
    let limit = params.limit.unwrap_or(usize::MAX);

    let cycles: Vec<Cycle> = if scope.includes(HistoryScope::Cycles) {
        store.cycles().iter().take(limit).cloned().collect()
    } else {
        Vec::new()
    };
    let symptoms: Vec<Symptom> = if scope.includes(HistoryScope::Symptoms) {
        store.symptoms().iter().take(limit).cloned().collect()
    } else {
        Vec::new()
    };
    let moods: Vec<Mood> = if scope.includes(HistoryScope::Moods) {
        store.moods().iter().take(limit).cloned().collect()
    } else {
        Vec::new()
    };

    let summary = ForecastEngine::new().summary(store.cycles(), store.symptoms(), store.moods());
    let message = render_history(&cycles, &symptoms, &moods, &summary);

    Ok(HistoryResponse {
        cycles,
        symptoms,
        moods,
        summary,
        message,
    })
}

fn render_history(cycles: &[Cycle], symptoms: &[Symptom], moods: &[Mood], summary: &HistorySummary) -> String {
    let mut sections = vec![format!(
        "History: {} cycles ({} complete), {} symptoms, {} moods",
        summary.total_cycles, summary.completed_cycles, summary.total_symptoms, summary.total_moods
    )];

    if !cycles.is_empty() {
        let lines = cycles
            .iter()
            .map(|c| {
                let range = match c.end_date {
                    Some(end) => format!("{} to {} ({} days)", c.start_date, end, c.duration),
                    None => format!("{} (ongoing)", c.start_date),
                };
                format!("- {} | {} flow{}", range, c.flow.as_str(), notes_suffix(&c.notes))
            })
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("Cycles:\n{}", lines));
    }

    if !symptoms.is_empty() {
        let lines = symptoms
            .iter()
            .map(|s| {
                format!(
                    "- {} | {} ({}){}",
                    s.date,
                    s.kind.display_name(),
                    s.severity.as_str(),
                    notes_suffix(&s.notes)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("Symptoms:\n{}", lines));
    }

    if !moods.is_empty() {
        let lines = moods
            .iter()
            .map(|m| {
                format!(
                    "- {} | {} | energy {}/10{}",
                    m.date,
                    m.mood.display_name(),
                    m.energy,
                    notes_suffix(&m.notes)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("Moods:\n{}", lines));
    }

    sections.join("\n\n")
}

fn notes_suffix(notes: &Option<String>) -> String {
    match notes {
        Some(text) => format!(" | {}", text),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CycleInput, MoodInput, MoodKind};
    use crate::storage::SqliteSlotStorage;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_history_scope_and_limit() {
        let mut store = CycleStore::load(SqliteSlotStorage::in_memory().unwrap());
        store.add_cycle(CycleInput::starting(date(2024, 1, 1)).ending(date(2024, 1, 5)));
        store.add_cycle(CycleInput::starting(date(2024, 2, 1)));
        store.add_mood(MoodInput::new(date(2024, 2, 2), MoodKind::Sad, 3));

        let response = list_history(
            &store,
            HistoryParams {
                collection: Some("cycles".to_string()),
                limit: Some(1),
            },
        )
        .unwrap();

        assert_eq!(response.cycles.len(), 1);
        assert_eq!(response.cycles[0].start_date, date(2024, 2, 1));
        assert!(response.moods.is_empty());
        assert_eq!(response.summary.total_cycles, 2);
        assert_eq!(response.summary.latest_energy, Some(3));
        assert!(response.message.contains("2024-02-01 (ongoing)"));
    }

    #[test]
    fn test_unknown_collection_rejected() {
        let store = CycleStore::load(SqliteSlotStorage::in_memory().unwrap());
        let result = list_history(
            &store,
            HistoryParams {
                collection: Some("periods".to_string()),
                limit: None,
            },
        );

        assert!(result.is_err());
    }
}
