/// Tool for logging mood and energy
///
/// This module implements the mood_log MCP tool.

use serde::{Deserialize, Serialize};
use crate::domain::{self, MoodInput, MoodKind};
use crate::storage::SlotStorage;
use crate::store::CycleStore;
use crate::tools::{non_blank, parse_optional_date, ToolError};

/// Energy recorded when the caller gives none
pub const DEFAULT_ENERGY: u8 = 5;

/// Parameters for logging a mood
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogMoodParams {
    pub date: Option<String>, // Optional date, defaults to today
    pub mood: String,
    pub energy: Option<u8>,
    pub notes: Option<String>,
}

/// Response from logging a mood
#[derive(Debug, Serialize)]
pub struct LogMoodResponse {
    pub success: bool,
    pub mood_id: String,
    pub message: String,
}

/// Log a mood in the store
pub fn log_mood<S: SlotStorage>(
    store: &mut CycleStore<S>,
    params: LogMoodParams,
) -> Result<LogMoodResponse, ToolError> {
    let mood = match non_blank(Some(params.mood)) {
        Some(s) => MoodKind::parse_label(&s),
        None => {
            return Err(ToolError::InvalidArgument {
                field: "mood",
                message: "Mood is required".to_string(),
            })
        }
    };

    let date = parse_optional_date("date", params.date)?.unwrap_or_else(domain::today);

    let input = MoodInput {
        date,
        mood,
        energy: params.energy.unwrap_or(DEFAULT_ENERGY),
        notes: non_blank(params.notes),
    };
    input.validate()?;

    let logged = store.add_mood(input);

    Ok(LogMoodResponse {
        success: true,
        mood_id: logged.id.to_string(),
        message: format!(
            "Logged mood '{}' with energy {}/10 on {}.",
            logged.mood.display_name(),
            logged.energy,
            logged.date
        ),
    })
}
