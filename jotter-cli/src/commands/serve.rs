//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jotter_server::db::create_pool;
use jotter_server::{run_server, ServerConfig};

use super::default_database_path;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Database file path (overrides JOTTER_DB; default: ~/.jotter/jotter.db)
    #[arg(long, env = "JOTTER_DB")]
    pub database: Option<PathBuf>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database = match args.database {
        Some(path) => path,
        None => default_database_path()?,
    };

    tracing::info!(
        "Starting jotter server on {} (database: {})",
        args.bind,
        database.display()
    );

    // Pool is lazy: the first request opens the first connection
    let pool = create_pool(&database).context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
