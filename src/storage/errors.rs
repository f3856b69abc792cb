//! Storage error types
//!
//! Every persistence failure surfaces as a [`StorageError`]; the storage
//! layer never retries. The `Display` text of the underlying engine error
//! is preserved so the API layer can report it verbatim.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying SQLite failure (I/O, corruption, lock contention)
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A previous panic left the connection guard poisoned
    #[error("storage connection lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_message_passthrough() {
        let err = StorageError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.to_string(), rusqlite::Error::InvalidQuery.to_string());
    }
}
