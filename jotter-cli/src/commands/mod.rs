//! Command implementations for the jotter CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

pub mod init_db;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use init_db::run_init_db;
pub use serve::run_serve;

/// Default database path: ~/.jotter/jotter.db (directory created on demand)
pub(crate) fn default_database_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let data_dir = home.join(".jotter");

    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)
            .context(format!("Failed to create {}", data_dir.display()))?;
        info!("Created data directory: {}", data_dir.display());
    }

    Ok(data_dir.join("jotter.db"))
}
