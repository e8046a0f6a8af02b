//! jotter CLI - small note-keeping service over an embedded SQLite database
//!
//! Entry point for the `jotter` command-line tool, which provides:
//! - HTTP API server (`serve` subcommand)
//! - One-shot database schema initialization (`init-db` subcommand)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "jotter",
    author,
    version,
    about = "Note-keeping HTTP service backed by SQLite",
    long_about = "Serve a small JSON API for authors and notes over an embedded \
                  SQLite database. Connections are opened per request; the schema \
                  is created with the init-db command."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Initialize (or reset) the database schema
    InitDb(commands::init_db::InitDbArgs),
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}
