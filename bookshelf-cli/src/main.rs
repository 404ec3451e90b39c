//! bookshelf CLI - runs the book catalogue HTTP API
//!
//! - `serve`: load settings, connect, create the schema, serve on :8080
//! - `migrate`: connect and create the schema, then exit

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", version, about = "Book catalogue HTTP API")]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Environment file holding the DB_* settings
    #[arg(long, global = true, env = "BOOKSHELF_ENV_FILE", default_value = ".env")]
    env_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server on port 8080
    Serve(commands::serve::ServeArgs),

    /// Create the books table if it does not exist
    Migrate,
}

/// Load the env file; a missing or unreadable file is fatal.
fn load_env_file(path: &Path) -> Result<()> {
    dotenvy::from_path(path)
        .with_context(|| format!("Error loading {} file", path.display()))?;
    tracing::debug!("Loaded environment from {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })
        .context("Failed to initialize tracing")?;

    load_env_file(&cli.env_file)?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate => commands::run_migrate().await?,
    }

    Ok(())
}
