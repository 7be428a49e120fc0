/// Persistence round trips through SQLite slot storage on disk
use cycle_tracker_mcp::*;
use chrono::NaiveDate;
use tempfile::{tempdir, NamedTempFile};

#[cfg(test)]
mod persistence_integration_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reload_restores_all_collections() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let (cycles, symptoms, moods) = {
            let mut store = CycleStore::load(SqliteSlotStorage::new(&db_path).unwrap());
            store.add_cycle(
                CycleInput::starting(date(2024, 1, 3))
                    .ending(date(2024, 1, 8))
                    .with_flow(Flow::Light)
                    .with_notes("first"),
            );
            store.add_cycle(CycleInput::starting(date(2024, 2, 1)));
            store.add_symptom(SymptomInput::new(
                date(2024, 2, 2),
                SymptomKind::Custom("Dizziness".to_string()),
                Severity::Severe,
            ));
            store.add_mood(MoodInput::new(date(2024, 2, 2), MoodKind::Irritated, 3).with_notes("long day"));

            (store.cycles().to_vec(), store.symptoms().to_vec(), store.moods().to_vec())
        };

        let reopened = CycleStore::load(SqliteSlotStorage::new(&db_path).unwrap());
        assert_eq!(reopened.cycles(), cycles.as_slice());
        assert_eq!(reopened.symptoms(), symptoms.as_slice());
        assert_eq!(reopened.moods(), moods.as_slice());
        assert_eq!(reopened.cycles()[0].start_date, date(2024, 2, 1));
    }

    #[test]
    fn test_custom_labels_resembling_catalogue_survive_reload() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let (symptoms, moods) = {
            let mut store = CycleStore::load(SqliteSlotStorage::new(&db_path).unwrap());
            store.add_symptom(SymptomInput::new(
                date(2024, 5, 1),
                SymptomKind::Custom("Back pain".to_string()),
                Severity::Mild,
            ));
            store.add_symptom(SymptomInput::new(
                date(2024, 5, 2),
                SymptomKind::Custom("back_pain".to_string()),
                Severity::Mild,
            ));
            store.add_mood(MoodInput::new(date(2024, 5, 1), MoodKind::Custom("Happy".to_string()), 6));
            (store.symptoms().to_vec(), store.moods().to_vec())
        };

        // An exact catalogue key is folded on creation, other spellings stay custom
        assert_eq!(symptoms[0].kind, SymptomKind::BackPain);
        assert_eq!(symptoms[1].kind, SymptomKind::Custom("Back pain".to_string()));

        let reopened = CycleStore::load(SqliteSlotStorage::new(&db_path).unwrap());
        assert_eq!(reopened.symptoms(), symptoms.as_slice());
        assert_eq!(reopened.moods(), moods.as_slice());
        assert_eq!(reopened.moods()[0].mood, MoodKind::Custom("Happy".to_string()));
    }

    #[test]
    fn test_empty_store_writes_nothing() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteSlotStorage::new(temp_file.path()).unwrap();

        let adapter = PersistenceAdapter::new(&storage);
        let empty: Vec<Cycle> = Vec::new();
        assert_eq!(adapter.save(Slot::Cycles, &empty), SaveOutcome::SkippedEmpty);

        for slot in Slot::ALL {
            assert_eq!(storage.read_slot(slot.key()).unwrap(), None);
        }

        let reloaded = CycleStore::load(&storage);
        assert!(reloaded.cycles().is_empty());
        assert!(reloaded.symptoms().is_empty());
        assert!(reloaded.moods().is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_as_empty() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteSlotStorage::new(temp_file.path()).unwrap();
        storage.write_slot(Slot::Cycles.key(), "{not a list").unwrap();
        storage
            .write_slot(Slot::Moods.key(), r#"[{"id":"1","date":"2024-03-01","mood":"happy","energy":7}]"#)
            .unwrap();

        let store = CycleStore::load(&storage);
        assert!(store.cycles().is_empty());
        assert_eq!(store.moods().len(), 1);
        assert_eq!(store.moods()[0].mood, MoodKind::Happy);
    }

    #[test]
    fn test_clear_is_the_only_way_to_empty() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let mut store = CycleStore::load(SqliteSlotStorage::new(&db_path).unwrap());
            store.add_mood(MoodInput::new(date(2024, 3, 1), MoodKind::Calm, 6));
        }

        let storage = SqliteSlotStorage::new(&db_path).unwrap();
        storage.clear().unwrap();
        assert!(CycleStore::load(&storage).moods().is_empty());
    }

    #[test]
    fn test_unopenable_path_falls_back_to_memory() {
        let dir = tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("missing").join("nested").join("cycles.db");

        let storage = SqliteSlotStorage::open_or_in_memory(&db_path).unwrap();
        let mut store = CycleStore::load(storage);
        store.add_cycle(CycleInput::starting(date(2024, 4, 1)));

        assert_eq!(store.cycles().len(), 1);
        assert!(!db_path.exists());
    }
}
