//! bookshelf-server: HTTP API for a book catalogue
//!
//! Four JSON endpoints over a single `books` table in PostgreSQL,
//! plus the storage connector and schema bootstrap they need.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use config::{ConfigError, SslMode, StorageConfig};
pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState, ServerConfig};
