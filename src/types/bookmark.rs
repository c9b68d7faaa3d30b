use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::errors::ExportError;

/// A user-saved reference to an event, deduplicated by (title, date).
///
/// Any additional caller-supplied fields are carried through the store and
/// its exports untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BookmarkRecord {
    /// Creates a record with no extra fields.
    pub fn new(title: &str, date: &str) -> Self {
        Self {
            title: title.to_string(),
            date: date.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    /// Whether this record and `other` collide under the (title, date) key.
    pub fn same_key(&self, other: &BookmarkRecord) -> bool {
        self.title == other.title && self.date == other.date
    }
}

/// A file offered to the user for download: name, MIME type, and body.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: String,
    pub body: String,
}

impl ExportArtifact {
    /// Writes the artifact into `dir` under its own filename and returns the
    /// resulting path. Creates `dir` if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)
            .map_err(|e| ExportError::Io(format!("Failed to create export directory: {}", e)))?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.body)
            .map_err(|e| ExportError::Io(format!("Failed to write export file: {}", e)))?;
        Ok(path)
    }
}
