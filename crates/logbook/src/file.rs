//! JSON-lines file-backed document store.
//!
//! Backs the `file://` scheme. Each record is one JSON document per line,
//! appended to a single file. Reads tolerate corrupt lines (they are skipped)
//! and treat a missing file as an empty store.

use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::record::{LogRecord, Predicate, SortOrder};
use crate::store::DocumentStore;

/// Durable document store writing JSON lines to a single file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes appends so concurrent puts cannot interleave lines.
    append_gate: Mutex<()>,
}

impl JsonFileStore {
    /// Opens a store at the given path, creating parent directories.
    ///
    /// The file itself is created lazily on the first `put`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        Ok(Self {
            path,
            append_gate: Mutex::new(()),
        })
    }

    /// Returns the path records are appended to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    async fn put(&self, record: &LogRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.append_gate.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn find(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        limit: usize,
    ) -> Result<Vec<LogRecord>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut matched: Vec<LogRecord> = contents
            .lines()
            .filter_map(|line| serde_json::from_str::<LogRecord>(line).ok())
            .filter(|r| predicate.matches(r))
            .collect();

        order.sort(&mut matched);
        matched.truncate(limit);
        Ok(matched)
    }
}
