/// Tool for recording a cycle
///
/// This module implements the cycle_log MCP tool.

use serde::{Deserialize, Serialize};
use crate::domain::{CycleInput, Flow};
use crate::storage::SlotStorage;
use crate::store::CycleStore;
use crate::tools::{non_blank, parse_date, parse_optional_date, ToolError};

/// Parameters for recording a cycle
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogCycleParams {
    pub start_date: String,
    pub end_date: Option<String>,
    pub flow: Option<String>, // light, medium or heavy; defaults to medium
    pub notes: Option<String>,
}

/// Response from recording a cycle
#[derive(Debug, Serialize)]
pub struct LogCycleResponse {
    pub success: bool,
    pub cycle_id: String,
    pub duration: i64,
    pub message: String,
}

/// Record a cycle in the store
pub fn log_cycle<S: SlotStorage>(
    store: &mut CycleStore<S>,
    params: LogCycleParams,
) -> Result<LogCycleResponse, ToolError> {
    if params.start_date.trim().is_empty() {
        return Err(ToolError::InvalidArgument {
            field: "start_date",
            message: "Start date is required".to_string(),
        });
    }

    let start_date = parse_date("start_date", &params.start_date)?;
    let end_date = parse_optional_date("end_date", params.end_date)?;

    let flow = match non_blank(params.flow) {
        Some(s) => Flow::parse(&s).ok_or_else(|| ToolError::InvalidArgument {
            field: "flow",
            message: format!("Invalid flow '{}'. Valid options: light, medium, heavy", s),
        })?,
        None => Flow::default(),
    };

    let input = CycleInput {
        start_date,
        end_date,
        flow,
        notes: non_blank(params.notes),
    };
    input.validate()?;

    let cycle = store.add_cycle(input);

    let message = match cycle.end_date {
        Some(end) => format!(
            "Recorded cycle from {} to {} ({} days, {} flow).",
            cycle.start_date,
            end,
            cycle.duration,
            cycle.flow.as_str()
        ),
        None => format!(
            "Recorded cycle starting {} ({} flow).",
            cycle.start_date,
            cycle.flow.as_str()
        ),
    };

    Ok(LogCycleResponse {
        success: true,
        cycle_id: cycle.id.to_string(),
        duration: cycle.duration,
        message,
    })
}
