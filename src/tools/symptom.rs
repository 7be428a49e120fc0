/// Tool for logging symptoms
///
/// This module implements the symptom_log MCP tool.

use serde::{Deserialize, Serialize};
use crate::domain::{self, Severity, SymptomInput, SymptomKind};
use crate::storage::SlotStorage;
use crate::store::CycleStore;
use crate::tools::{non_blank, parse_optional_date, ToolError};

/// Parameters for logging a symptom
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogSymptomParams {
    pub date: Option<String>, // Optional date, defaults to today
    #[serde(rename = "type")]
    pub symptom_type: String,
    pub severity: Option<String>, // mild, moderate or severe; defaults to moderate
    pub notes: Option<String>,
}

/// Response from logging a symptom
#[derive(Debug, Serialize)]
pub struct LogSymptomResponse {
    pub success: bool,
    pub symptom_id: String,
    pub message: String,
}

/// Log a symptom in the store
pub fn log_symptom<S: SlotStorage>(
    store: &mut CycleStore<S>,
    params: LogSymptomParams,
) -> Result<LogSymptomResponse, ToolError> {
    let kind = match non_blank(Some(params.symptom_type)) {
        Some(s) => SymptomKind::parse_label(&s),
        None => {
            return Err(ToolError::InvalidArgument {
                field: "type",
                message: "Symptom type is required".to_string(),
            })
        }
    };

    let date = parse_optional_date("date", params.date)?.unwrap_or_else(domain::today);

    let severity = match non_blank(params.severity) {
        Some(s) => Severity::parse(&s).ok_or_else(|| ToolError::InvalidArgument {
            field: "severity",
            message: format!("Invalid severity '{}'. Valid options: mild, moderate, severe", s),
        })?,
        None => Severity::default(),
    };

    let input = SymptomInput {
        date,
        kind,
        severity,
        notes: non_blank(params.notes),
    };
    input.validate()?;

    let symptom = store.add_symptom(input);

    Ok(LogSymptomResponse {
        success: true,
        symptom_id: symptom.id.to_string(),
        message: format!(
            "Logged {} {}symptom '{}' on {}.",
            symptom.severity.as_str(),
            if symptom.kind.is_custom() { "custom " } else { "" },
            symptom.kind.display_name(),
            symptom.date
        ),
    })
}
