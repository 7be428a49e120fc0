/// MCP tools for recording and forecasting
///
/// This module contains the tools external clients can call. Each tool
/// parses and validates its arguments, then goes through the store's
/// add/query interface.

pub mod cycle;
pub mod symptom;
pub mod mood;
pub mod history;
pub mod forecast;

// Re-export tool functions for easy access
pub use cycle::*;
pub use symptom::*;
pub use mood::*;
pub use history::*;
pub use forecast::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::DomainError;

/// Errors reported back to the tool caller
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: &'static str, message: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ToolError::InvalidArgument {
        field,
        message: format!("'{}' is not a date in YYYY-MM-DD format", value),
    })
}

/// Parse an optional date argument, treating a blank string as absent
pub(crate) fn parse_optional_date(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, ToolError> {
    match non_blank(value) {
        Some(s) => parse_date(field, &s).map(Some),
        None => Ok(None),
    }
}

/// Drop blank strings so "" and missing mean the same thing
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
