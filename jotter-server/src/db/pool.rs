//! Database connection pool management
//!
//! Uses a lazy sqlx SqlitePool: building the pool performs no I/O, the
//! first connection is opened when a request first acquires one.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-service tooling; SQLite serializes writers anyway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a SQLite connection pool over a database file.
///
/// The parent directory is created if missing. Connections are opened
/// lazily, so this never touches the database file itself; the file is
/// created on first acquisition.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created.
pub fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS)
}

/// Create a SQLite connection pool with a custom connection limit.
pub fn create_pool_with_options(
    path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);

    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options))
}

/// Create an in-memory database pool (for testing).
///
/// Limited to a single connection with idle reaping disabled: every
/// in-memory connection gets its own database, so the one connection must
/// stay alive for the pool's lifetime.
pub fn create_memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new().in_memory(true).foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_lazy_with(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pool_opens_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("jotter.db");

        let pool = create_pool(&path).unwrap();
        // No connection yet: the database file must not exist
        assert!(!path.exists());

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(result.0, 1);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn connection_returns_to_pool_on_drop() {
        let pool = create_memory_pool();

        {
            let mut conn = pool.acquire().await.unwrap();
            sqlx::query("SELECT 1").execute(&mut *conn).await.unwrap();
        }

        // With max_connections = 1, a second acquire only succeeds if the
        // first connection was released exactly once
        let _conn = pool.acquire().await.unwrap();
        assert_eq!(pool.size(), 1);
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let pool = create_memory_pool();
        crate::db::init_schema(&pool).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO notes (author_id, title, body, created) VALUES (999, 't', 'b', '2026-01-01T00:00:00Z')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }
}
