/// Persistence adapter between the in-memory collections and slot storage
///
/// Collections are read once at startup and written after every mutation.
/// Nothing here ever fails outward: unreadable or corrupt slots load as
/// empty collections, and failed writes are logged while the in-memory state
/// stays authoritative for the session.
///
/// An empty collection is never written. Clearing data therefore cannot go
/// through this path; use [`SqliteSlotStorage::clear`](crate::SqliteSlotStorage::clear).

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{Cycle, Mood, Symptom};
use crate::storage::{Slot, SlotStorage, StorageError};

/// What happened to a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The collection was serialized and stored
    Written,
    /// The collection was empty, so the slot was left untouched
    SkippedEmpty,
    /// Serialization or the storage write failed; the error was logged
    Failed,
}

/// Reads and writes the three record collections
pub struct PersistenceAdapter<S: SlotStorage> {
    storage: S,
}

impl<S: SlotStorage> PersistenceAdapter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load every collection, substituting an empty one for any slot that
    /// is missing or unreadable
    pub fn load(&self) -> (Vec<Cycle>, Vec<Symptom>, Vec<Mood>) {
        let cycles = self.load_slot(Slot::Cycles);
        let symptoms = self.load_slot(Slot::Symptoms);
        let moods = self.load_slot(Slot::Moods);

        tracing::info!(
            "Loaded {} cycles, {} symptoms, {} moods",
            cycles.len(),
            symptoms.len(),
            moods.len()
        );

        (cycles, symptoms, moods)
    }

    /// Persist `collection` into `slot` unless it is empty
    pub fn save<T: Serialize>(&self, slot: Slot, collection: &[T]) -> SaveOutcome {
        if collection.is_empty() {
            tracing::debug!("Skipping save of empty '{}' slot", slot.key());
            return SaveOutcome::SkippedEmpty;
        }

        match self.try_save(slot, collection) {
            Ok(()) => SaveOutcome::Written,
            Err(e) => {
                tracing::warn!("Failed to persist '{}' slot: {}", slot.key(), e);
                SaveOutcome::Failed
            }
        }
    }

    fn try_save<T: Serialize>(&self, slot: Slot, collection: &[T]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(collection)?;
        self.storage.write_slot(slot.key(), &payload)
    }

    fn load_slot<T: DeserializeOwned>(&self, slot: Slot) -> Vec<T> {
        match self.try_load(slot) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Ignoring unreadable '{}' slot: {}", slot.key(), e);
                Vec::new()
            }
        }
    }

    fn try_load<T: DeserializeOwned>(&self, slot: Slot) -> Result<Vec<T>, StorageError> {
        match self.storage.read_slot(slot.key())? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }
}
