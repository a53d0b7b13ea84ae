//! # logbook
//!
//! A minimal log-persistence-and-query adapter. Applications hand it
//! structured log records; it stores them in a document store and answers
//! time-windowed, level-filtered queries over what was stored.
//!
//! This crate provides:
//!
//! - [`LogRecord`] — A persisted record: level, message, write-time timestamp
//! - [`QueryFilter`] — Query parameters, all optional with defaults
//! - [`DocumentStore`] — Abstract trait for document-store backends
//! - [`MemoryStore`] / [`JsonFileStore`] — In-memory and JSON-lines backends
//! - [`Backend`] / [`connect`] — Connection provider resolving a database URI
//! - [`Logbook`] — The adapter: best-effort writes, bounded ordered queries
//! - [`Diagnostics`] — Side channel reporting the adapter's own health
//!
//! ## Example
//!
//! ```rust,no_run
//! use logbook::{Logbook, LogbookConfig, QueryFilter};
//!
//! # async fn example() {
//! let config = LogbookConfig::new("mem://");
//! let log = Logbook::connect(&config).await;
//!
//! log.write("error", "disk full").await;
//!
//! let recent = log
//!     .query(QueryFilter::new().with_level("error").with_size(5))
//!     .await;
//! assert!(recent.len() <= 5);
//! # }
//! ```
//!
//! Writes never raise: a failed persist is reported to the [`Diagnostics`]
//! sink and swallowed. Queries degrade to an empty result the same way, so
//! logging can never be the reason the host application crashes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adapter;
pub mod config;
pub mod connect;
pub mod diag;
pub mod error;
pub mod file;
pub mod memory;
pub mod record;
pub mod store;

// Re-export main types
pub use adapter::Logbook;
pub use config::LogbookConfig;
pub use connect::{connect, Backend};
pub use diag::{
    DiagnosticEvent, Diagnostics, NoopDiagnostics, SharedDiagnostics, TracingDiagnostics,
};
pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{LogRecord, Predicate, QueryFilter, ResolvedQuery, SortOrder};
pub use store::DocumentStore;
