/// Prediction behaviour over recorded histories
use cycle_tracker_mcp::*;
use chrono::{Duration, NaiveDate};

#[cfg(test)]
mod prediction_unit_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> CycleStore<SqliteSlotStorage> {
        CycleStore::load(SqliteSlotStorage::in_memory().expect("in-memory storage"))
    }

    #[test]
    fn test_default_length_with_thin_history() {
        let mut store = store();
        assert_eq!(store.average_cycle_length(), DEFAULT_CYCLE_LENGTH);

        store.add_cycle(CycleInput::starting(date(2024, 1, 1)).ending(date(2024, 1, 6)));
        assert_eq!(store.average_cycle_length(), DEFAULT_CYCLE_LENGTH);

        store.add_cycle(CycleInput::starting(date(2024, 2, 1)));
        assert_eq!(store.average_cycle_length(), 5);
    }

    #[test]
    fn test_open_cycles_only_use_default() {
        let mut store = store();
        store.add_cycle(CycleInput::starting(date(2024, 1, 1)));
        store.add_cycle(CycleInput::starting(date(2024, 2, 1)));

        assert_eq!(store.average_cycle_length(), DEFAULT_CYCLE_LENGTH);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let mut store = store();
        store.add_cycle(CycleInput::starting(date(2024, 1, 1)).ending(date(2024, 1, 6)));
        store.add_cycle(CycleInput::starting(date(2024, 2, 1)).ending(date(2024, 2, 5)));

        // (5 + 4) / 2 = 4.5
        assert_eq!(store.average_cycle_length(), 5);
    }

    #[test]
    fn test_countdowns_from_recent_start() {
        let today = date(2024, 6, 15);
        let mut store = store();
        store.add_cycle(CycleInput::starting(today - Duration::days(5)));

        assert_eq!(store.next_period_countdown_on(today), Some(23));
        assert_eq!(store.next_ovulation_countdown_on(today), Some(9));
    }

    #[test]
    fn test_past_predictions_are_absent() {
        let today = date(2024, 6, 15);
        let mut store = store();
        store.add_cycle(CycleInput::starting(today - Duration::days(30)));

        assert_eq!(store.next_period_countdown_on(today), None);
        assert_eq!(store.next_ovulation_countdown_on(today), None);

        let mut exact = self::store();
        exact.add_cycle(CycleInput::starting(today - Duration::days(28)));
        assert_eq!(exact.next_period_countdown_on(today), None);
    }

    #[test]
    fn test_no_history_no_prediction() {
        let store = store();
        assert_eq!(store.next_period_countdown(), None);
        assert_eq!(store.next_ovulation_countdown(), None);
    }

    #[test]
    fn test_backfilled_cycle_becomes_reference() {
        let today = date(2024, 6, 15);
        let mut store = store();
        store.add_cycle(CycleInput::starting(date(2024, 6, 10)));
        store.add_cycle(CycleInput::starting(date(2024, 5, 12)));

        // The older cycle was added last, so it anchors the prediction
        assert_eq!(predicted_period_date(store.cycles()), Some(date(2024, 6, 9)));
        assert_eq!(store.next_period_countdown_on(today), None);
    }

    #[test]
    fn test_countdowns_are_repeatable() {
        let today = date(2024, 6, 15);
        let mut store = store();
        store.add_cycle(CycleInput::starting(date(2024, 6, 1)).ending(date(2024, 6, 6)));
        store.add_cycle(CycleInput::starting(date(2024, 6, 12)).ending(date(2024, 6, 17)));

        let first = (store.next_period_countdown_on(today), store.next_ovulation_countdown_on(today));
        let second = (store.next_period_countdown_on(today), store.next_ovulation_countdown_on(today));
        assert_eq!(first, second);
        assert!(first.0.map_or(true, |d| d > 0));
    }

    #[test]
    fn test_forecast_urgency() {
        let today = date(2024, 6, 15);
        let mut store = store();
        store.add_cycle(CycleInput::starting(today - Duration::days(26)));

        let forecast = ForecastEngine::new().forecast(store.cycles(), today);
        assert_eq!(forecast.next_period_in_days, Some(2));
        assert_eq!(forecast.period_urgency, Urgency::VeryClose);
        assert_eq!(forecast.ovulation_urgency, Urgency::NoPrediction);
    }
}
