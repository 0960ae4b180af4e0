//! Logging setup
//! Installs a `tracing` subscriber that writes human-readable lines to stderr.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Build the filter: `RUST_LOG` wins, otherwise `fallback`.
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. Call once at start-up.
pub fn init_logging(fallback_filter: &str) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(fallback_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}
