/// Forecast engine for predictions, reminders and history summaries
///
/// This module bundles the prediction functions into a single forecast for
/// display, classifies how close each predicted event is, and turns the
/// forecast into reminder messages.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{self, Cycle, Mood, Symptom};

/// Countdown at or below which an event is "very close"
pub const VERY_CLOSE_DAYS: i64 = 3;
/// Countdown at or below which an event is "close"
pub const CLOSE_DAYS: i64 = 7;

/// How near a predicted event is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// No prediction is available
    NoPrediction,
    VeryClose,
    Close,
    Distant,
}

impl Urgency {
    /// Classify a countdown in days
    pub fn from_countdown(days: Option<i64>) -> Self {
        match days {
            None => Urgency::NoPrediction,
            Some(d) if d <= VERY_CLOSE_DAYS => Urgency::VeryClose,
            Some(d) if d <= CLOSE_DAYS => Urgency::Close,
            Some(_) => Urgency::Distant,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::NoPrediction => "No prediction",
            Urgency::VeryClose => "Very close",
            Urgency::Close => "Close",
            Urgency::Distant => "Distant",
        }
    }
}

/// Everything known about the upcoming period and ovulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// Date the forecast was computed for
    pub today: NaiveDate,
    pub average_cycle_length: i64,
    /// Start date of the reference cycle, if any cycle is recorded
    pub reference_start: Option<NaiveDate>,
    pub next_period_date: Option<NaiveDate>,
    pub next_period_in_days: Option<i64>,
    pub period_urgency: Urgency,
    pub next_ovulation_date: Option<NaiveDate>,
    pub next_ovulation_in_days: Option<i64>,
    pub ovulation_urgency: Urgency,
}

/// Record counts across the three collections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total_cycles: usize,
    pub completed_cycles: usize,
    pub total_symptoms: usize,
    pub total_moods: usize,
    /// Energy of the most recently added mood
    pub latest_energy: Option<u8>,
}

/// Stateless engine turning record collections into forecasts
#[derive(Debug, Default, Clone, Copy)]
pub struct ForecastEngine;

impl ForecastEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the forecast for `today`
    pub fn forecast(&self, cycles: &[Cycle], today: NaiveDate) -> Forecast {
        let next_period_in_days = domain::next_period_countdown(cycles, today);
        let next_ovulation_in_days = domain::next_ovulation_countdown(cycles, today);

        Forecast {
            today,
            average_cycle_length: domain::average_cycle_length(cycles),
            reference_start: domain::reference_cycle(cycles).map(|c| c.start_date),
            next_period_date: domain::predicted_period_date(cycles),
            next_period_in_days,
            period_urgency: Urgency::from_countdown(next_period_in_days),
            next_ovulation_date: domain::predicted_ovulation_date(cycles),
            next_ovulation_in_days,
            ovulation_urgency: Urgency::from_countdown(next_ovulation_in_days),
        }
    }

    /// Reminder messages worth showing for a forecast
    pub fn reminders(&self, forecast: &Forecast) -> Vec<String> {
        let mut reminders = Vec::new();

        match forecast.next_period_in_days {
            None => {
                reminders.push("Record your cycle to get period predictions.".to_string());
            }
            Some(days) if days <= VERY_CLOSE_DAYS => {
                reminders.push(format!(
                    "Your period is coming in {}! Get ready ahead of time.",
                    day_count(days)
                ));
            }
            Some(days) if days <= CLOSE_DAYS => {
                reminders.push(format!(
                    "Your period is near ({}). Consider keeping supplies at hand.",
                    day_count(days)
                ));
            }
            Some(_) => {}
        }

        match forecast.next_ovulation_in_days {
            Some(days) if days <= VERY_CLOSE_DAYS => {
                reminders.push(format!(
                    "You are in your fertile window (ovulation in {}). Your body may show changes.",
                    day_count(days)
                ));
            }
            Some(days) if days <= CLOSE_DAYS => {
                reminders.push(format!(
                    "Fertile window approaching (ovulation in {}). You may notice more energy.",
                    day_count(days)
                ));
            }
            _ => {}
        }

        reminders
    }

    /// Summarize how much history has been recorded
    pub fn summary(&self, cycles: &[Cycle], symptoms: &[Symptom], moods: &[Mood]) -> HistorySummary {
        HistorySummary {
            total_cycles: cycles.len(),
            completed_cycles: cycles.iter().filter(|c| c.is_complete()).count(),
            total_symptoms: symptoms.len(),
            total_moods: moods.len(),
            latest_energy: moods.first().map(|m| m.energy),
        }
    }
}

/// "1 day" / "N days"
pub fn day_count(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CycleInput;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn started_days_ago(days: i64) -> Vec<Cycle> {
        vec![Cycle::new(CycleInput::starting(today() - Duration::days(days)))]
    }

    #[test]
    fn test_urgency_thresholds() {
        assert_eq!(Urgency::from_countdown(None), Urgency::NoPrediction);
        assert_eq!(Urgency::from_countdown(Some(1)), Urgency::VeryClose);
        assert_eq!(Urgency::from_countdown(Some(3)), Urgency::VeryClose);
        assert_eq!(Urgency::from_countdown(Some(4)), Urgency::Close);
        assert_eq!(Urgency::from_countdown(Some(7)), Urgency::Close);
        assert_eq!(Urgency::from_countdown(Some(8)), Urgency::Distant);
    }

    #[test]
    fn test_forecast_without_history() {
        let engine = ForecastEngine::new();
        let forecast = engine.forecast(&[], today());

        assert_eq!(forecast.average_cycle_length, 28);
        assert_eq!(forecast.reference_start, None);
        assert_eq!(forecast.next_period_in_days, None);
        assert_eq!(forecast.period_urgency, Urgency::NoPrediction);

        let reminders = engine.reminders(&forecast);
        assert_eq!(reminders.len(), 1);
        assert!(reminders[0].contains("Record your cycle"));
    }

    #[test]
    fn test_forecast_for_recent_cycle() {
        let engine = ForecastEngine::new();
        let forecast = engine.forecast(&started_days_ago(5), today());

        assert_eq!(forecast.next_period_in_days, Some(23));
        assert_eq!(forecast.period_urgency, Urgency::Distant);
        assert_eq!(forecast.next_ovulation_in_days, Some(9));
        assert_eq!(forecast.ovulation_urgency, Urgency::Distant);
        assert!(engine.reminders(&forecast).is_empty());
    }

    #[test]
    fn test_reminders_near_events() {
        let engine = ForecastEngine::new();

        // Period in 2 days, ovulation already passed
        let forecast = engine.forecast(&started_days_ago(26), today());
        let reminders = engine.reminders(&forecast);
        assert_eq!(reminders.len(), 1);
        assert!(reminders[0].contains("coming in 2 days"));

        // Ovulation in 1 day
        let forecast = engine.forecast(&started_days_ago(13), today());
        let reminders = engine.reminders(&forecast);
        assert!(reminders.iter().any(|r| r.contains("fertile window (ovulation in 1 day)")));
    }

    #[test]
    fn test_summary_counts() {
        let engine = ForecastEngine::new();
        let mut cycles = started_days_ago(40);
        cycles.insert(
            0,
            Cycle::new(CycleInput::starting(today() - Duration::days(10)).ending(today() - Duration::days(5))),
        );

        let summary = engine.summary(&cycles, &[], &[]);
        assert_eq!(summary.total_cycles, 2);
        assert_eq!(summary.completed_cycles, 1);
        assert_eq!(summary.total_moods, 0);
        assert_eq!(summary.latest_energy, None);
    }
}
