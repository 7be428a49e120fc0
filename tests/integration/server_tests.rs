/// Server startup against real database files
use cycle_tracker_mcp::*;
use chrono::NaiveDate;
use tempfile::{tempdir, NamedTempFile};

#[cfg(test)]
mod server_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_server_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let server = CycleTrackerServer::new(temp_file.path().to_path_buf()).await;
        assert!(server.is_ok());
    }

    #[tokio::test]
    async fn test_server_reloads_saved_records() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();
        let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        {
            let mut server = CycleTrackerServer::new(db_path.clone())
                .await
                .expect("Failed to create server");
            server.store_mut().add_cycle(CycleInput::starting(start));
        }

        let server = CycleTrackerServer::new(db_path).await.expect("Failed to reopen server");
        assert_eq!(server.store().cycles().len(), 1);
        assert_eq!(server.store().cycles()[0].start_date, start);
    }

    #[tokio::test]
    async fn test_server_starts_without_usable_database() {
        let dir = tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("no_such_dir").join("cycles.db");

        let mut server = CycleTrackerServer::new(db_path).await.expect("Server should still start");
        server
            .store_mut()
            .add_mood(MoodInput::new(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(), MoodKind::Sad, 2));
        assert_eq!(server.store().moods().len(), 1);
    }
}
