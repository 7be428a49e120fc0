/// Main entry point for the Cycle Tracker MCP server
///
/// Sets up logging, resolves where records are kept, and serves MCP
/// requests over stdin/stdout until the client disconnects.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use cycle_tracker_mcp::CycleTrackerServer;

const DATA_DIR_NAME: &str = "cycle_tracker";
const DATABASE_FILE: &str = "cycles.db";

/// Check that a directory exists (creating it if needed) and accepts writes
fn is_writable_dir(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    let probe = dir.join(".write_probe");
    match std::fs::write(&probe, b"probe") {
        Ok(()) => {
            let _ = std::fs::remove_file(&probe);
            true
        }
        Err(_) => false,
    }
}

/// Pick the first writable location for the database file
fn default_database_path() -> PathBuf {
    let candidates = [
        dirs::home_dir().map(|p| p.join(format!(".{}", DATA_DIR_NAME))),
        dirs::data_dir().map(|p| p.join(DATA_DIR_NAME)),
        dirs::config_dir().map(|p| p.join(DATA_DIR_NAME)),
        std::env::current_dir().ok().map(|p| p.join(format!(".{}", DATA_DIR_NAME))),
    ];

    if let Some(dir) = candidates.iter().flatten().find(|dir| is_writable_dir(dir)) {
        return dir.join(DATABASE_FILE);
    }

    let temp_dir = std::env::temp_dir().join(DATA_DIR_NAME);
    if let Err(e) = std::fs::create_dir_all(&temp_dir) {
        warn!("Cannot create {}: {}", temp_dir.display(), e);
    }
    let path = temp_dir.join(DATABASE_FILE);

    warn!("Using temporary directory for database: {}", path.display());
    path
}

/// Resolve the database path and make sure its directory exists
///
/// Never fails: an unusable location is logged and handed on, and the
/// server keeps records in memory when it cannot open it.
fn prepare_database_path(requested: Option<PathBuf>) -> PathBuf {
    let path = match requested {
        Some(path) => path,
        None => return default_database_path(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Cannot create database directory {}: {}", parent.display(), e);
            }
        }
    }
    path
}

/// Command line arguments for the Cycle Tracker MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.debug {
            "info"
        } else {
            "warn"
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(format!("cycle_tracker_mcp={}", args.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Cycle Tracker MCP server");

    let db_path = prepare_database_path(args.database);

    info!("Using database at: {}", db_path.display());

    let server = CycleTrackerServer::new(db_path).await?;
    server.run().await?;

    info!("Cycle Tracker MCP server shutdown complete");
    Ok(())
}
