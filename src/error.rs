//! Unified error types for bookdash
//!
//! Every fallible library operation returns [`Result`]. Application edges
//! (CLI parsing, terminal setup) wrap these in `anyhow`.

/// Unified error type for bookdash operations
#[derive(Debug, thiserror::Error)]
pub enum BookdashError {
    /// I/O errors (storage files, export/import files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// User input or imported data failed validation
    #[error("{0}")]
    Validation(String),

    /// Durable storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience Result type using BookdashError
pub type Result<T> = std::result::Result<T, BookdashError>;

impl BookdashError {
    /// Create a Validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a Storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this error is a user-facing validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
