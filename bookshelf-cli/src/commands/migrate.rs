//! Schema migration command

use anyhow::{Context, Result};

use bookshelf_server::db::{self, migrations};
use bookshelf_server::StorageConfig;

/// Connect and create the books table, then exit
pub async fn run_migrate() -> Result<()> {
    let storage = StorageConfig::from_env().context("Invalid database configuration")?;
    let pool = db::connect(&storage)
        .await
        .context("Error connecting to the database")?;

    migrations::run(&pool)
        .await
        .context("Could not migrate database")?;

    pool.close().await;
    Ok(())
}
