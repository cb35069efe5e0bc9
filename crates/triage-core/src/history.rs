//! Persisted processing history.
//!
//! History lives in a flat CSV file (`Timestamp, Source, Sentiment, Score,
//! Reply`), newest rows first, unbounded. The store is a narrow capability
//! injected into the reconciler so the file-backed implementation can be
//! swapped without touching the matching/derivation logic. Single active
//! writer assumed; concurrent appends may lose rows.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::types::HistoryEntry;

/// Load/save capability for the durable history table.
pub trait HistoryStore {
    /// Returns the current table. A missing or unreadable file is an empty
    /// table, never an error.
    fn load(&self) -> Vec<HistoryEntry>;

    /// Replaces the durable table with `entries`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the file cannot be written.
    fn save(&self, entries: &[HistoryEntry]) -> Result<(), CoreError>;
}

/// CSV-file-backed [`HistoryStore`].
#[derive(Debug, Clone)]
pub struct CsvHistoryStore {
    path: PathBuf,
}

impl CsvHistoryStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for CsvHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        let mut reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(e) => {
                // Absent on first run; anything else is worth a trace.
                if self.path.exists() {
                    tracing::warn!(path = %self.path.display(), error = %e, "history file unreadable, starting empty");
                }
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for row in reader.deserialize::<HistoryEntry>() {
            match row {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "skipping malformed history row");
                }
            }
        }
        entries
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), CoreError> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }
}
