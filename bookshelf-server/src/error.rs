//! Error types for bookshelf-server

use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

/// Startup and server-level failures.
///
/// Per-request failures are `http::ApiError`; these are the ones that end
/// the process.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
