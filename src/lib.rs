/// Public library interface for the Cycle Tracker MCP server
///
/// This module exports the record model, prediction engine, slot storage
/// and the server that exposes them to MCP clients.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod store;
mod analytics;
mod tools;
mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    PersistenceAdapter, SaveOutcome, Slot, SlotStorage, SqliteSlotStorage, StorageError,
};
pub use store::CycleStore;
pub use analytics::{ForecastEngine, Forecast, HistorySummary, Urgency};
pub use tools::ToolError;

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main cycle tracker server that implements the MCP protocol
///
/// The server owns the single record store for the process and hands the
/// MCP layer access to its add/query interface.
pub struct CycleTrackerServer {
    store: CycleStore<SqliteSlotStorage>,
}

impl CycleTrackerServer {
    /// Create a new cycle tracker server backed by the database at `db_path`
    ///
    /// Previously saved records are loaded once here. If the database
    /// cannot be opened the server still starts, keeping records in memory.
    pub async fn new(db_path: PathBuf) -> Result<Self, ServerError> {
        tracing::info!("Initializing Cycle Tracker server with database: {:?}", db_path);

        let storage = SqliteSlotStorage::open_or_in_memory(&db_path)?;
        let store = CycleStore::load(storage);

        Ok(Self { store })
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin is closed or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            "Starting MCP server with {} recorded cycles",
            self.store.cycles().len()
        );

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Get a reference to the record store
    pub fn store(&self) -> &CycleStore<SqliteSlotStorage> {
        &self.store
    }

    /// Get a mutable reference to the record store
    pub fn store_mut(&mut self) -> &mut CycleStore<SqliteSlotStorage> {
        &mut self.store
    }
}
