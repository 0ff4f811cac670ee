//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;
use numeric_random::RandomError;

/// Errors surfaced by the `numeric` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A random draw had no valid outcome.
    #[error("Random generation error: {0}")]
    Random(#[from] RandomError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command arguments are inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
