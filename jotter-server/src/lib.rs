//! jotter-server: note-keeping HTTP service over an embedded SQLite database
//!
//! Provides the database layer (lazy connection pool, request-scoped
//! connections, one-shot schema initialization) and the axum HTTP surface
//! the `jotter` CLI serves.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, AppState, ServerConfig};
