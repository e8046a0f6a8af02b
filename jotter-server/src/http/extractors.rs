//! Custom Axum extractors

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::Sqlite;

use super::error::ApiError;
use super::server::AppState;
use crate::db::repos::DbError;

/// The request's database connection.
///
/// Acquired from the pool when the handler is dispatched, which keeps
/// connections lazy: handlers that don't declare this extractor (such as
/// `/health`) never open one. The connection is returned to the pool
/// exactly once, when the value drops at the end of the request, so a
/// request holds at most one live connection.
pub struct DbConn(pub PoolConnection<Sqlite>);

impl FromRequestParts<Arc<AppState>> for DbConn {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await.map_err(DbError::from)?;
        Ok(Self(conn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use axum::http::Request;

    fn request_parts() -> Parts {
        let (parts, ()) = Request::builder()
            .uri("/api/notes")
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn sequential_requests_reuse_the_single_connection() {
        let state = Arc::new(AppState {
            pool: create_memory_pool(),
        });

        // Two sequential extractions against a one-connection pool: the
        // second only succeeds because the first handle was released on drop.
        for _ in 0..2 {
            let mut parts = request_parts();
            let DbConn(mut conn) = DbConn::from_request_parts(&mut parts, &state)
                .await
                .unwrap();
            sqlx::query("SELECT 1").execute(&mut *conn).await.unwrap();
        }
        assert_eq!(state.pool.size(), 1);
    }
}
