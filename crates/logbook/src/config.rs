//! Adapter configuration.

use serde::{Deserialize, Serialize};

fn default_database_uri() -> String {
    "mem://".to_string()
}

/// Configuration for constructing a [`Logbook`](crate::Logbook).
///
/// Deserializable so it can be embedded in an application's configuration
/// document. When `database_uri` is omitted, the in-process store is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogbookConfig {
    /// Connection descriptor for the document store, e.g. `mem://` or
    /// `file:///var/log/app/records.jsonl`.
    #[serde(default = "default_database_uri")]
    pub database_uri: String,
}

impl LogbookConfig {
    /// Creates a config pointing at the given database URI.
    #[must_use]
    pub fn new(database_uri: impl Into<String>) -> Self {
        Self {
            database_uri: database_uri.into(),
        }
    }
}

impl Default for LogbookConfig {
    fn default() -> Self {
        Self {
            database_uri: default_database_uri(),
        }
    }
}
