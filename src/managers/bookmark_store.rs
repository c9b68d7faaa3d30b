//! Bookmark Store.
//!
//! Implements `BookmarkStoreTrait` — list/add/clear over the single
//! persisted bookmark list, backed by the storage port, plus export to a
//! downloadable JSON file.

use chrono::{DateTime, Local};

use crate::storage::StoragePort;
use crate::types::bookmark::{BookmarkRecord, ExportArtifact};
use crate::types::errors::{ExportError, StorageError};

/// Storage key owning the serialized bookmark list.
pub const BOOKMARKS_KEY: &str = "hip_bookmarks_v1";
/// MIME type of bookmark exports.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// Returns the persisted list, newest first. Absent or malformed data
    /// reads as an empty list; this never fails.
    fn list(&self) -> Vec<BookmarkRecord>;
    /// Adds `record` unless one with the same (title, date) already exists.
    /// Returns whether the record was added.
    fn add(&mut self, record: BookmarkRecord) -> Result<bool, StorageError>;
    /// Removes the persisted list entirely. Idempotent.
    fn clear(&mut self) -> Result<(), StorageError>;
    /// Serializes the current list into a timestamp-named download artifact.
    fn export_all(&self) -> Result<ExportArtifact, ExportError>;
}

/// Bookmark store over an injected storage port.
///
/// The storage port exclusively owns the serialized form; every operation
/// reconstructs the list on demand and persists the whole list on mutation.
pub struct BookmarkStore {
    storage: Box<dyn StoragePort>,
}

impl BookmarkStore {
    pub fn new(storage: Box<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Export filename for the given instant: second precision, with '-'
    /// for every date, time, and field separator.
    pub fn export_filename(now: DateTime<Local>) -> String {
        format!("bookmarks-{}.json", now.format("%Y-%m-%d-%H-%M-%S"))
    }

    fn persist(&mut self, list: &[BookmarkRecord]) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(list).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(BOOKMARKS_KEY, &json)
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    fn list(&self) -> Vec<BookmarkRecord> {
        match self.storage.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn add(&mut self, record: BookmarkRecord) -> Result<bool, StorageError> {
        let mut list = self.list();
        if list.iter().any(|existing| existing.same_key(&record)) {
            return Ok(false);
        }
        list.insert(0, record);
        self.persist(&list)?;
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove(BOOKMARKS_KEY)
    }

    fn export_all(&self) -> Result<ExportArtifact, ExportError> {
        let list = self.list();
        let body = serde_json::to_string_pretty(&list)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        Ok(ExportArtifact {
            filename: Self::export_filename(Local::now()),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            body,
        })
    }
}
