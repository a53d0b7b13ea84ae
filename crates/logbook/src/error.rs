//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur while persisting or querying log records.
///
/// These never cross the public write/query surface of
/// [`Logbook`](crate::Logbook) — they are contained there and reported to the
/// diagnostics sink. Backend implementors and tests see them directly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store handle is degraded; no connection was established.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// The database URI had no recognized scheme.
    #[error("unsupported database URI: {0}")]
    UnsupportedUri(String),

    /// Serialization or deserialization of a record failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
