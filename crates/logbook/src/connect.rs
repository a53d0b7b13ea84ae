//! The connection provider.
//!
//! Resolves a database URI to a live [`Backend`] and reports the outcome to
//! the diagnostic channel. Two schemes are recognized:
//!
//! - `mem://` — in-process [`MemoryStore`]
//! - `file://<path>` — durable [`JsonFileStore`] at the given path
//!
//! Anything else, or a failed open, degrades to [`Backend::Unavailable`]:
//! the adapter still constructs, and every operation against it fails
//! internally and is contained per the adapter's best-effort policy.

use crate::config::LogbookConfig;
use crate::diag::{DiagnosticEvent, SharedDiagnostics};
use crate::error::{Result, StoreError};
use crate::file::JsonFileStore;
use crate::memory::MemoryStore;
use crate::record::{LogRecord, Predicate, SortOrder};
use crate::store::DocumentStore;

/// A resolved document-store backend.
#[derive(Debug)]
pub enum Backend {
    /// In-process store.
    Memory(MemoryStore),
    /// JSON-lines file store.
    File(JsonFileStore),
    /// No connection was established; every operation fails with the
    /// retained reason.
    Unavailable(String),
}

impl DocumentStore for Backend {
    async fn put(&self, record: &LogRecord) -> Result<()> {
        match self {
            Self::Memory(store) => store.put(record).await,
            Self::File(store) => store.put(record).await,
            Self::Unavailable(reason) => Err(StoreError::Unavailable(reason.clone())),
        }
    }

    async fn find(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        limit: usize,
    ) -> Result<Vec<LogRecord>> {
        match self {
            Self::Memory(store) => store.find(predicate, order, limit).await,
            Self::File(store) => store.find(predicate, order, limit).await,
            Self::Unavailable(reason) => Err(StoreError::Unavailable(reason.clone())),
        }
    }
}

/// Establishes a backend for the configured URI.
///
/// Connection success and failure are reported to the sink; failure yields
/// [`Backend::Unavailable`] rather than an error, so callers always get a
/// backend to hand to the adapter.
pub async fn connect(config: &LogbookConfig, diag: &SharedDiagnostics) -> Backend {
    match open_backend(&config.database_uri).await {
        Ok(backend) => {
            diag.report(&DiagnosticEvent::Connected {
                uri: config.database_uri.clone(),
            });
            backend
        }
        Err(e) => {
            let reason = e.to_string();
            diag.report(&DiagnosticEvent::ConnectionFailed {
                uri: config.database_uri.clone(),
                reason: reason.clone(),
            });
            Backend::Unavailable(reason)
        }
    }
}

async fn open_backend(uri: &str) -> Result<Backend> {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return Err(StoreError::UnsupportedUri(uri.to_string()));
    };

    match scheme {
        "mem" | "memory" => Ok(Backend::Memory(MemoryStore::new())),
        "file" => Ok(Backend::File(JsonFileStore::open(rest).await?)),
        _ => Err(StoreError::UnsupportedUri(uri.to_string())),
    }
}
