//! Database connection pool management
//!
//! Uses sqlx PgPool with a fixed connection limit.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::StorageConfig;
use crate::Result;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a PostgreSQL connection pool from storage settings.
///
/// Establishes one connection before returning, so an unreachable server
/// or bad credentials fail here rather than on the first request.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let config = StorageConfig::from_env()?;
/// let pool = connect(&config).await?;
/// ```
pub async fn connect(config: &StorageConfig) -> Result<PgPool> {
    connect_with_max(config, DEFAULT_MAX_CONNECTIONS).await
}

/// Open a PostgreSQL connection pool with a custom connection limit.
pub async fn connect_with_max(
    config: &StorageConfig,
    max_connections: u32,
) -> Result<PgPool> {
    tracing::info!(dsn = %config.redacted_dsn(), "Connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(config.connect_options())
        .await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DB_HOST=... DB_NAME=... cargo test -p bookshelf-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let config = StorageConfig::from_env().expect("DB_* variables required");
        let pool = connect(&config).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
