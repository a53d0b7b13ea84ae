//! The document-store seam.
//!
//! This module provides the [`DocumentStore`] trait for abstracting over
//! backends that persist self-describing records without a rigid schema. The
//! store handle is a single injected dependency — the adapter references it
//! but does not manage its connection lifecycle.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::record::{LogRecord, Predicate, SortOrder};

/// Trait for document-store backends.
///
/// Both operations suspend while awaiting the store's I/O. Implementations
/// must be safe for concurrent use by multiple in-flight calls; no ordering
/// between concurrent `put` calls is guaranteed, and a `find` racing a `put`
/// may or may not observe it.
pub trait DocumentStore: Send + Sync {
    /// Persists a single record as one document.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot accept the record.
    fn put(&self, record: &LogRecord) -> impl Future<Output = Result<()>> + Send;

    /// Retrieves records matching the predicate.
    ///
    /// Results are sorted by timestamp in the requested direction and
    /// truncated to at most `limit` records; ties keep store-native order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<LogRecord>>> + Send;
}

impl<S: DocumentStore> DocumentStore for Arc<S> {
    async fn put(&self, record: &LogRecord) -> Result<()> {
        (**self).put(record).await
    }

    async fn find(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        limit: usize,
    ) -> Result<Vec<LogRecord>> {
        (**self).find(predicate, order, limit).await
    }
}
