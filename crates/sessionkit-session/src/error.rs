//! Error types for session repository operations.

/// Error type for session repository operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Session was not found in the repository.
    #[error("Session not found: {0}")]
    NotFound(String),

    /// Error from the backing store.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for session repository operations.
pub type Result<T> = std::result::Result<T, Error>;
