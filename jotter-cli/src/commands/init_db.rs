//! One-shot database schema initialization command
//!
//! Drops existing tables and recreates the schema. Run once before first
//! serving, or again to reset the database.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jotter_server::db::{create_pool, init_schema};

use super::default_database_path;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database file path (overrides JOTTER_DB; default: ~/.jotter/jotter.db)
    #[arg(long, env = "JOTTER_DB")]
    pub database: Option<PathBuf>,
}

/// Run schema initialization
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let database = match args.database {
        Some(path) => path,
        None => default_database_path()?,
    };

    let pool = create_pool(&database).context("Failed to create database pool")?;

    init_schema(&pool)
        .await
        .context("Failed to initialize database schema")?;

    println!("Initialized the database at {}", database.display());
    Ok(())
}
