//! The log store adapter.
//!
//! [`Logbook`] is the write path and the read path in one handle: it
//! normalizes incoming log events into persisted records and answers
//! time-windowed, level-filtered queries with ordered, size-bounded results.
//!
//! Failure policy is total containment. Logging must never crash or block the
//! application it instruments, so a failed persist degrades to a no-op and a
//! failed query to an empty sequence — in both cases the failure is reported
//! to the diagnostics sink, where tests and operators can observe it.

use std::sync::Arc;

use chrono::Utc;

use crate::config::LogbookConfig;
use crate::connect::{connect, Backend};
use crate::diag::{DiagnosticEvent, SharedDiagnostics, TracingDiagnostics};
use crate::error::Result;
use crate::record::{LogRecord, QueryFilter, ResolvedQuery};
use crate::store::DocumentStore;

/// Log persistence and query adapter over a document store.
///
/// Holds a store handle and a diagnostics sink; no other state. Both
/// operations are single-shot request/response — there is no internal
/// queueing, batching, retrying, or locking across awaits.
pub struct Logbook<S = Backend> {
    store: S,
    diag: SharedDiagnostics,
}

impl Logbook<Backend> {
    /// Connects to the configured document store with the default tracing
    /// diagnostics sink.
    ///
    /// Construction never fails: an unreachable or unrecognized store yields
    /// an adapter whose operations are contained failures (reported to the
    /// sink), matching the best-effort policy of the write and query paths.
    pub async fn connect(config: &LogbookConfig) -> Self {
        Self::connect_with(config, Arc::new(TracingDiagnostics::new())).await
    }

    /// Connects with a caller-supplied diagnostics sink.
    pub async fn connect_with(config: &LogbookConfig, diag: SharedDiagnostics) -> Self {
        let store = connect(config, &diag).await;
        Self { store, diag }
    }
}

impl<S: DocumentStore> Logbook<S> {
    /// Builds an adapter around an injected store handle.
    ///
    /// This is the seam for test doubles and for sharing one store between
    /// several owners (pass an `Arc<S>`).
    pub fn with_store(store: S, diag: SharedDiagnostics) -> Self {
        Self { store, diag }
    }

    /// Returns the underlying store handle.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Persists one log record with the current time as its timestamp.
    ///
    /// Best-effort: suspends until the store acknowledges, but a failed
    /// persist is reported to the diagnostics sink and swallowed. Callers
    /// that do not care about completion may spawn the returned future
    /// instead of awaiting it.
    pub async fn write(&self, level: impl Into<String>, message: impl Into<String>) {
        if let Err(e) = self.try_write(level.into(), message.into()).await {
            self.diag.report(&DiagnosticEvent::WriteFailed {
                reason: e.to_string(),
            });
        }
    }

    async fn try_write(&self, level: String, message: String) -> Result<()> {
        let record = LogRecord::new(level, message, Utc::now());
        self.store.put(&record).await?;
        tracing::trace!(target: "logbook", level = %record.level, "log record persisted");
        Ok(())
    }

    /// Queries stored records, applying the filter's defaults.
    ///
    /// Returns at most `filter.size` records, sorted by timestamp in the
    /// requested direction (newest first by default), all matching the
    /// resolved time window and level. A failed query is reported to the
    /// diagnostics sink and degrades to an empty sequence — callers cannot
    /// distinguish "no match" from "query failed" here; watch the sink for
    /// that.
    pub async fn query(&self, filter: QueryFilter) -> Vec<LogRecord> {
        self.query_with(filter, |_| {}).await
    }

    /// Queries stored records and additionally notifies a callback.
    ///
    /// The callback is invoked exactly once, with either the real results or
    /// the empty fallback; the same sequence is always also returned. The
    /// return value is the primary contract — the callback exists for
    /// callers that consume results as a notification.
    pub async fn query_with<F>(&self, filter: QueryFilter, notify: F) -> Vec<LogRecord>
    where
        F: FnOnce(&[LogRecord]),
    {
        let ResolvedQuery {
            predicate,
            order,
            limit,
        } = filter.resolve(Utc::now());

        let results = match self.store.find(&predicate, order, limit).await {
            Ok(records) => records,
            Err(e) => {
                self.diag.report(&DiagnosticEvent::QueryFailed {
                    reason: e.to_string(),
                });
                Vec::new()
            }
        };

        notify(&results);
        results
    }

    /// Emits a log line on the process's own log output without persisting it.
    ///
    /// The free-form level maps onto the closest `tracing` level; unknown
    /// labels fall back to info with the label attached as a field.
    pub fn mirror(&self, level: &str, message: &str) {
        match level {
            "trace" => tracing::trace!(target: "logbook", "{message}"),
            "debug" => tracing::debug!(target: "logbook", "{message}"),
            "info" => tracing::info!(target: "logbook", "{message}"),
            "warn" | "warning" => tracing::warn!(target: "logbook", "{message}"),
            "error" | "fatal" => tracing::error!(target: "logbook", "{message}"),
            other => tracing::info!(target: "logbook", level = %other, "{message}"),
        }
    }
}
