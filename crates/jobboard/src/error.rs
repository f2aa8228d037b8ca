//! Error types for the job-board core.

use thiserror::Error;

/// Result type alias for job-board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Closed set of error kinds surfaced by this crate.
///
/// Nothing here is retried internally; callers dispatch by exhaustive
/// matching (an HTTP layer maps these onto status codes).
#[derive(Debug, Error)]
pub enum BoardError {
    /// Input rejected before any storage round trip
    #[error("Validation error: {0}")]
    Validation(String),

    /// No row matched the requested identifier
    #[error("No job: {0}")]
    NotFound(i64),

    /// Backing-store failure, passed through unchanged
    #[error("Storage error: {0}")]
    Storage(#[from] tokio_postgres::Error),

    /// Connection string or setup error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Pool error
    #[cfg(feature = "pool")]
    #[error("Pool error: {0}")]
    Pool(String),

    /// Migration error
    #[cfg(feature = "migrate")]
    #[error("Migration error: {0}")]
    Migration(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl BoardError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for BoardError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}

#[cfg(feature = "migrate")]
impl From<refinery::Error> for BoardError {
    fn from(err: refinery::Error) -> Self {
        Self::Migration(err.to_string())
    }
}
