/// Storage layer for persisting tracker data
///
/// Each record collection lives in its own named slot of a local key-value
/// store. The slots are backed by SQLite, and the persistence adapter on top
/// decides when to read and write them.

pub mod adapter;
pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use adapter::*;
pub use sqlite::*;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// The named slots, one per record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Cycles,
    Symptoms,
    Moods,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Cycles, Slot::Symptoms, Slot::Moods];

    /// Key under which the slot is stored
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Cycles => "cycles",
            Slot::Symptoms => "symptoms",
            Slot::Moods => "moods",
        }
    }
}

/// Trait defining a durable key-value store of serialized slots
///
/// This keeps the adapter independent of SQLite so another local backend
/// can be dropped in.
pub trait SlotStorage {
    /// Read the serialized payload stored under `key`, if any
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `payload` under `key`, replacing any previous value
    fn write_slot(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        (**self).write_slot(key, payload)
    }
}
