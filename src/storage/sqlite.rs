/// SQLite implementation of the slot storage interface
///
/// Every slot is one row in the `slots` table holding the serialized
/// collection as text.

use std::path::Path;
use rusqlite::{Connection, OptionalExtension, params};
use chrono::Utc;

use crate::storage::{StorageError, SlotStorage, migrations};

/// SQLite-based slot store
pub struct SqliteSlotStorage {
    conn: Connection,
}

impl SqliteSlotStorage {
    /// Open (or create) the slot database at `db_path`
    ///
    /// This runs any necessary migrations so the schema is up to date.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite slot storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Open a private in-memory database that lives as long as this value
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Open the database at `db_path`, falling back to an in-memory store
    ///
    /// The session keeps working when the file is unusable; nothing recorded
    /// in it survives a restart.
    pub fn open_or_in_memory(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        match Self::new(db_path) {
            Ok(storage) => Ok(storage),
            Err(e) => {
                tracing::warn!(
                    "Slot storage at {:?} unavailable ({}), keeping data in memory for this session",
                    db_path,
                    e
                );
                Self::in_memory()
            }
        }
    }

    /// Remove every slot
    ///
    /// This is the only way to clear stored data; the adapter never writes
    /// an empty collection.
    pub fn clear(&self) -> Result<(), StorageError> {
        let removed = self.conn.execute("DELETE FROM slots", [])?;
        tracing::info!("Cleared {} stored slots", removed);
        Ok(())
    }
}

impl SlotStorage for SqliteSlotStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM slots WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(payload)
    }

    fn write_slot(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO slots (key, payload, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at",
            params![key, payload, Utc::now().to_rfc3339()],
        )?;

        tracing::debug!("Wrote slot '{}' ({} bytes)", key, payload.len());
        Ok(())
    }
}
