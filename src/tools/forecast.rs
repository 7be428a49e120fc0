/// Tool for period and ovulation forecasts
///
/// This module implements the cycle_forecast MCP tool.

use serde::{Deserialize, Serialize};
use crate::analytics::{day_count, Forecast, ForecastEngine};
use crate::domain;
use crate::storage::SlotStorage;
use crate::store::CycleStore;
use crate::tools::{parse_optional_date, ToolError};

/// Parameters for a forecast
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ForecastParams {
    pub as_of: Option<String>, // Optional reference day, defaults to today
}

/// Response from a forecast
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub forecast: Forecast,
    pub reminders: Vec<String>,
    pub message: String,
}

/// Forecast the next period and ovulation from the recorded cycles
pub fn get_forecast<S: SlotStorage>(
    store: &CycleStore<S>,
    params: ForecastParams,
) -> Result<ForecastResponse, ToolError> {
    let today = parse_optional_date("as_of", params.as_of)?.unwrap_or_else(domain::today);

    let engine = ForecastEngine::new();
    let forecast = engine.forecast(store.cycles(), today);
    let reminders = engine.reminders(&forecast);

    let period_line = match (forecast.next_period_in_days, forecast.next_period_date) {
        (Some(days), Some(date)) => format!(
            "Next period: in {} ({}) [{}]",
            day_count(days),
            date,
            forecast.period_urgency.label()
        ),
        _ => "Next period: no prediction yet".to_string(),
    };
    let ovulation_line = match (forecast.next_ovulation_in_days, forecast.next_ovulation_date) {
        (Some(days), Some(date)) => format!(
            "Next ovulation: in {} ({}) [{}]",
            day_count(days),
            date,
            forecast.ovulation_urgency.label()
        ),
        _ => "Next ovulation: waiting for cycle data".to_string(),
    };

    let mut message = format!(
        "{}\n{}\nAverage cycle length: {} days",
        period_line, ovulation_line, forecast.average_cycle_length
    );
    if !reminders.is_empty() {
        message.push_str("\n\nReminders:\n");
        message.push_str(
            &reminders
                .iter()
                .map(|r| format!("- {}", r))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    Ok(ForecastResponse {
        forecast,
        reminders,
        message,
    })
}
