//! Route handlers
//!
//! Organized by resource type:
//! - health: Health check endpoint (no database access)
//! - authors: Author accounts
//! - notes: Notes with author attribution

pub mod authors;
pub mod health;
pub mod notes;
