//! CLI error types

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Database could not be opened, initialized, or seeded
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Server failed to bind or run
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
