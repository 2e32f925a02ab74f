//! Result types for async file operations.

use std::path::PathBuf;

use super::error::{ExportError, ImportError};
use crate::editor::StoreSnapshot;

/// Result of an async export operation
pub struct ExportResult {
    pub path: PathBuf,
    pub outcome: Result<usize, ExportError>,
}

/// Result of an async import operation
pub struct ImportResult {
    pub path: PathBuf,
    pub outcome: Result<StoreSnapshot, ImportError>,
}
