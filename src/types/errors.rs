use std::fmt;

// === StorageError ===

/// Errors related to the key-value storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// The storage backend failed to read or write.
    Backend(String),
    /// Failed to serialize data for persistence.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Backend(msg) => write!(f, "Storage backend error: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === QuizError ===

/// Errors related to fetching a quiz from the external API.
#[derive(Debug)]
pub enum QuizError {
    /// A network error occurred while contacting the quiz API.
    Network(String),
    /// The quiz API returned a non-success HTTP status.
    Status(u16),
    /// The response body could not be parsed as a quiz payload.
    Parse(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Network(msg) => write!(f, "Quiz network error: {}", msg),
            QuizError::Status(code) => write!(f, "Quiz API returned status {}", code),
            QuizError::Parse(msg) => write!(f, "Quiz payload parse error: {}", msg),
        }
    }
}

impl std::error::Error for QuizError {}

// === ExportError ===

/// Errors related to exporting bookmarks to a downloadable file.
#[derive(Debug)]
pub enum ExportError {
    /// Failed to serialize the bookmark list.
    Serialization(String),
    /// A file system error occurred while writing the export.
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Serialization(msg) => {
                write!(f, "Export serialization error: {}", msg)
            }
            ExportError::Io(msg) => write!(f, "Export I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}
