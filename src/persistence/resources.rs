//! Resource types for file operation state tracking.

use bevy::prelude::*;
use bevy::tasks::Task;

use super::results::{ExportResult, ImportResult};

/// Resource tracking the last file operation error for display to user
#[derive(Resource, Default)]
pub struct FileOperationError {
    pub message: Option<String>,
}

/// Resource tracking async annotation file I/O
#[derive(Resource, Default)]
pub struct AsyncFileOperation {
    pub is_exporting: bool,
    pub is_importing: bool,
    /// Description of the current operation
    pub operation_description: Option<String>,
}

impl AsyncFileOperation {
    pub fn is_busy(&self) -> bool {
        self.is_exporting || self.is_importing
    }
}

/// Component for export task
#[derive(Component)]
pub struct ExportTask(pub Task<ExportResult>);

/// Component for import task
#[derive(Component)]
pub struct ImportTask(pub Task<ImportResult>);
