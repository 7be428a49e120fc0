/// Record creation and validation through the public API
use cycle_tracker_mcp::*;
use chrono::NaiveDate;
use std::collections::HashSet;

#[cfg(test)]
mod record_unit_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> CycleStore<SqliteSlotStorage> {
        CycleStore::load(SqliteSlotStorage::in_memory().expect("in-memory storage"))
    }

    #[test]
    fn test_cycle_duration_matches_dates() {
        let mut store = store();
        let closed = store.add_cycle(CycleInput::starting(date(2024, 2, 27)).ending(date(2024, 3, 3)));
        let open = store.add_cycle(CycleInput::starting(date(2024, 3, 28)));

        assert_eq!(closed.duration, 5);
        assert_eq!(open.duration, 0);
        assert_eq!(open.end_date, None);
    }

    #[test]
    fn test_newest_added_first_and_size_grows_by_one() {
        let mut store = store();
        store.add_symptom(SymptomInput::new(date(2024, 5, 1), SymptomKind::Cramps, Severity::Mild));
        let second = store.add_symptom(SymptomInput::new(date(2024, 4, 1), SymptomKind::Acne, Severity::Severe));

        assert_eq!(store.symptoms().len(), 2);
        assert_eq!(store.symptoms()[0], second);
        assert_eq!(store.symptoms()[1].kind, SymptomKind::Cramps);
    }

    #[test]
    fn test_ids_are_unique_across_collections() {
        let mut store = store();
        let mut ids = HashSet::new();

        for day in 1..=20 {
            ids.insert(store.add_cycle(CycleInput::starting(date(2024, 1, day))).id);
            ids.insert(store.add_mood(MoodInput::new(date(2024, 1, day), MoodKind::Neutral, 5)).id);
        }

        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn test_record_json_shape() {
        let mut store = store();
        let cycle = store.add_cycle(
            CycleInput::starting(date(2024, 1, 1))
                .ending(date(2024, 1, 5))
                .with_flow(Flow::Heavy),
        );
        let symptom = store.add_symptom(SymptomInput::new(
            date(2024, 1, 2),
            SymptomKind::BreastTenderness,
            Severity::Moderate,
        ));

        let cycle_json = serde_json::to_value(&cycle).unwrap();
        assert_eq!(cycle_json["startDate"], "2024-01-01");
        assert_eq!(cycle_json["endDate"], "2024-01-05");
        assert_eq!(cycle_json["duration"], 4);
        assert_eq!(cycle_json["flow"], "heavy");

        let symptom_json = serde_json::to_value(&symptom).unwrap();
        assert_eq!(symptom_json["type"], "breast_tenderness");
        assert_eq!(symptom_json["severity"], "moderate");
    }

    #[test]
    fn test_input_validation() {
        assert!(CycleInput::starting(date(2024, 1, 5)).ending(date(2024, 1, 1)).validate().is_err());
        assert!(MoodInput::new(date(2024, 1, 1), MoodKind::Happy, 11).validate().is_err());
        assert!(MoodInput::new(date(2024, 1, 1), MoodKind::Happy, MAX_ENERGY).validate().is_ok());
        assert!(SymptomInput::new(date(2024, 1, 1), SymptomKind::Custom("  ".to_string()), Severity::Mild)
            .validate()
            .is_err());

        let long_notes = "x".repeat(MAX_NOTES_LEN + 1);
        assert!(CycleInput::starting(date(2024, 1, 1)).with_notes(long_notes).validate().is_err());
    }
}
