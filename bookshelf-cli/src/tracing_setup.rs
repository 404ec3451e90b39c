//! Tracing setup for the bookshelf CLI
//!
//! Usage:
//!   bookshelf --debug serve              # Debug logging to console
//!   RUST_LOG=bookshelf_server=debug ...  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                             # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

/// Initialize tracing with console output
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        // Global subscriber is set after the first call either way
        let _ = init(&TracingConfig::default());
        assert!(init(&TracingConfig { debug: true }).is_err());
    }
}
