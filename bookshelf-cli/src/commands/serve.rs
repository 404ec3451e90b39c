//! HTTP server command
//!
//! Full startup path: settings, connection, schema, routes, serve.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::db::{self, migrations, MemoryBookRepository, PgBookRepository};
use bookshelf_server::{run_server, ServerConfig, StorageConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Serve from process memory instead of PostgreSQL (data is lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::default();

    let books: db::BookRepositoryArc = if args.in_memory {
        tracing::warn!("Serving from memory; books will not be persisted");
        Arc::new(MemoryBookRepository::new())
    } else {
        let storage = StorageConfig::from_env().context("Invalid database configuration")?;
        let pool = db::connect(&storage)
            .await
            .context("Error connecting to the database")?;
        migrations::run(&pool)
            .await
            .context("Could not migrate database")?;
        Arc::new(PgBookRepository::new(pool))
    };

    tracing::info!("Starting bookshelf server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(books, config).await.context("Server error")?;

    Ok(())
}
