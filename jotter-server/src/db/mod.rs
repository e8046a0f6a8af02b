//! Database layer - connection pool, schema initialization, repositories
//!
//! # Design Principles
//!
//! - Lazy connection pool (max 5 connections) - no connection is opened
//!   until a request first asks for one
//! - One connection per request, returned to the pool on drop
//! - Schema initialization is an explicit one-shot command, never implicit
//!   on server startup

use sqlx::SqlitePool;

pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;

/// Schema script applied by [`init_schema`]. Drops existing tables first,
/// so initialization always resets the database to an empty schema.
const SCHEMA: &str = include_str!("schema.sql");

/// Initialize (or reset) the database schema.
///
/// Executes the embedded schema script as a single batch. Any existing
/// `authors`/`notes` tables and their contents are dropped.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::info!("Database schema initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_schema_creates_tables() {
        let pool = create_memory_pool();
        init_schema(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn init_schema_resets_existing_data() {
        let pool = create_memory_pool();
        init_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO authors (username, created) VALUES ('ada', '2026-01-01T00:00:00Z')")
            .execute(&pool)
            .await
            .unwrap();

        // Re-running initialization drops and recreates everything
        init_schema(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM authors")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
