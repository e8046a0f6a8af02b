//! Repository implementations for database access
//!
//! Each repository borrows the request's connection, so all queries in one
//! request share the single cached handle. Patterns:
//! - List operations use JOINs (no N+1)
//! - Rely on DB constraints, map violations to typed errors

pub mod authors;
pub mod notes;

pub use authors::{Author, AuthorRepo};
pub use notes::{NoteRepo, NoteWithAuthor};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {0}")]
    Conflict(String),
}
