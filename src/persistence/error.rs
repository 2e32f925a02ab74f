//! Error types for annotation file I/O.

use std::path::PathBuf;

/// Errors that can occur while importing an annotation file
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse annotation file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {record}: {reason}")]
    Invalid { record: String, reason: String },
}

impl ImportError {
    pub(crate) fn invalid(record: impl Into<String>, reason: impl Into<String>) -> Self {
        ImportError::Invalid {
            record: record.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while exporting annotations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize annotations: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
