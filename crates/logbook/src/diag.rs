//! The side diagnostic channel.
//!
//! Operational messages about this component's own health — connection
//! outcomes, swallowed write/query failures — flow through the
//! [`Diagnostics`] trait, distinct from the log records the store manages.
//! Failures that the adapter contains become observable here.

use std::fmt;
use std::sync::Arc;

/// An operational event about the adapter's own health.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// A store connection was established.
    Connected {
        /// The database URI that was connected.
        uri: String,
    },
    /// A store connection could not be established.
    ConnectionFailed {
        /// The database URI that failed.
        uri: String,
        /// Why the connection failed.
        reason: String,
    },
    /// A persist attempt failed and was swallowed.
    WriteFailed {
        /// Why the write failed.
        reason: String,
    },
    /// A read attempt failed and degraded to an empty result.
    QueryFailed {
        /// Why the query failed.
        reason: String,
    },
}

impl DiagnosticEvent {
    /// Returns true for failure events.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !matches!(self, Self::Connected { .. })
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected { uri } => write!(f, "connected to document store at {uri}"),
            Self::ConnectionFailed { uri, reason } => {
                write!(f, "error connecting to document store at {uri}: {reason}")
            }
            Self::WriteFailed { reason } => write!(f, "error saving log record: {reason}"),
            Self::QueryFailed { reason } => write!(f, "error querying log records: {reason}"),
        }
    }
}

/// Trait for diagnostic sinks.
///
/// Implement this to route the adapter's health messages somewhere custom;
/// tests use a recording sink to observe contained failures.
pub trait Diagnostics: Send + Sync {
    /// Reports one event.
    fn report(&self, event: &DiagnosticEvent);
}

/// Shared diagnostics handle.
pub type SharedDiagnostics = Arc<dyn Diagnostics>;

/// Diagnostic sink backed by the `tracing` infrastructure.
///
/// Connection success is emitted at info level; every failure at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    /// Creates a new tracing-based sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Diagnostics for TracingDiagnostics {
    fn report(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::Connected { uri } => {
                tracing::info!(target: "logbook", %uri, "connected to document store");
            }
            DiagnosticEvent::ConnectionFailed { uri, reason } => {
                tracing::error!(
                    target: "logbook",
                    %uri,
                    %reason,
                    "failed to connect to document store"
                );
            }
            DiagnosticEvent::WriteFailed { reason } => {
                tracing::error!(target: "logbook", %reason, "failed to save log record");
            }
            DiagnosticEvent::QueryFailed { reason } => {
                tracing::error!(target: "logbook", %reason, "log query failed");
            }
        }
    }
}

/// A sink that discards every event, for disabled scenarios.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl NoopDiagnostics {
    /// Creates a new no-op sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Diagnostics for NoopDiagnostics {
    fn report(&self, _event: &DiagnosticEvent) {
        // Intentionally does nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_case::test_case;

    /// A test sink that counts reports.
    #[derive(Debug, Default)]
    struct CountingSink {
        count: AtomicUsize,
    }

    impl Diagnostics for CountingSink {
        fn report(&self, _event: &DiagnosticEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn sample_events() -> Vec<DiagnosticEvent> {
        vec![
            DiagnosticEvent::Connected {
                uri: "mem://".to_string(),
            },
            DiagnosticEvent::ConnectionFailed {
                uri: "bolt://x".to_string(),
                reason: "unsupported".to_string(),
            },
            DiagnosticEvent::WriteFailed {
                reason: "store down".to_string(),
            },
            DiagnosticEvent::QueryFailed {
                reason: "store down".to_string(),
            },
        ]
    }

    #[test]
    fn connected_is_not_a_failure() {
        let event = DiagnosticEvent::Connected {
            uri: "mem://".to_string(),
        };
        assert!(!event.is_failure());
    }

    #[test_case(DiagnosticEvent::ConnectionFailed { uri: "x://y".to_string(), reason: "r".to_string() } ; "connection failed")]
    #[test_case(DiagnosticEvent::WriteFailed { reason: "r".to_string() } ; "write failed")]
    #[test_case(DiagnosticEvent::QueryFailed { reason: "r".to_string() } ; "query failed")]
    fn failure_events_are_failures(event: DiagnosticEvent) {
        assert!(event.is_failure());
    }

    #[test]
    fn display_is_human_readable() {
        let event = DiagnosticEvent::Connected {
            uri: "file:///var/log/app.jsonl".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "connected to document store at file:///var/log/app.jsonl"
        );

        let event = DiagnosticEvent::WriteFailed {
            reason: "disk full".to_string(),
        };
        assert_eq!(event.to_string(), "error saving log record: disk full");
    }

    #[test]
    fn tracing_sink_handles_all_events() {
        let sink = TracingDiagnostics::new();
        for event in sample_events() {
            sink.report(&event); // Should not panic
        }
    }

    #[test]
    fn noop_sink_discards_events() {
        let sink = NoopDiagnostics::new();
        for event in sample_events() {
            sink.report(&event);
        }
    }

    #[test]
    fn counting_sink_tracks_reports() {
        let sink = CountingSink::default();
        for event in sample_events() {
            sink.report(&event);
        }
        assert_eq!(sink.count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn sink_in_arc() {
        let sink: SharedDiagnostics = Arc::new(TracingDiagnostics::new());
        sink.report(&DiagnosticEvent::Connected {
            uri: "mem://".to_string(),
        });
    }

    #[test]
    fn sinks_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingDiagnostics>();
        assert_send_sync::<NoopDiagnostics>();
    }
}
