//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses
//! - Request-scoped database connections via the [`extractors::DbConn`] extractor

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use extractors::DbConn;
pub use server::{run_server, AppState, ServerConfig};
