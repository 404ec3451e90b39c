//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - One pool per process, injected into handlers through router state
//! - Schema is a single `books` table created on startup if absent
//! - Repositories are the only code that issues SQL

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{connect, connect_with_max};
pub use repos::*;
