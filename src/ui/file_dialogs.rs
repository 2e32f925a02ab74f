//! Native save/open dialogs for export and import, run as async tasks.

use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use futures_lite::future;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::constants::DEFAULT_EXPORT_FILE_NAME;
use crate::persistence::{ExportRequest, ImportRequest};

/// Pending native file dialogs
#[derive(Resource, Default)]
pub struct FileDialogState {
    pub pending_export: Option<Task<Option<PathBuf>>>,
    pub pending_import: Option<Task<Option<PathBuf>>>,
}

impl FileDialogState {
    pub fn any_pending(&self) -> bool {
        self.pending_export.is_some() || self.pending_import.is_some()
    }

    /// Open a save dialog, starting in the directory of the last export
    pub fn open_export_dialog(&mut self, config: &AppConfig) {
        if self.pending_export.is_some() {
            return;
        }
        let directory = start_directory(config.data.last_export_path.as_deref());
        let file_name = config
            .data
            .last_export_path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_EXPORT_FILE_NAME)
            .to_string();

        self.pending_export = Some(AsyncComputeTaskPool::get().spawn(async move {
            rfd::AsyncFileDialog::new()
                .set_title("Export Annotations")
                .add_filter("JSON", &["json"])
                .set_directory(directory)
                .set_file_name(file_name)
                .save_file()
                .await
                .map(|h| h.path().to_path_buf())
        }));
    }

    pub fn open_import_dialog(&mut self, config: &AppConfig) {
        if self.pending_import.is_some() {
            return;
        }
        let directory = start_directory(config.data.last_import_path.as_deref());

        self.pending_import = Some(AsyncComputeTaskPool::get().spawn(async move {
            rfd::AsyncFileDialog::new()
                .set_title("Import Annotations")
                .add_filter("JSON", &["json"])
                .set_directory(directory)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        }));
    }
}

fn start_directory(last_path: Option<&Path>) -> PathBuf {
    last_path
        .and_then(Path::parent)
        .filter(|dir| dir.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(crate::paths::default_export_dir)
}

/// Forward chosen paths as export/import requests
pub fn poll_file_dialogs(
    mut dialogs: ResMut<FileDialogState>,
    mut export_events: MessageWriter<ExportRequest>,
    mut import_events: MessageWriter<ImportRequest>,
) {
    if let Some(ref mut task) = dialogs.pending_export
        && let Some(result) = future::block_on(future::poll_once(task))
    {
        dialogs.pending_export = None;
        if let Some(path) = result {
            export_events.write(ExportRequest { path });
        }
    }

    if let Some(ref mut task) = dialogs.pending_import
        && let Some(result) = future::block_on(future::poll_once(task))
    {
        dialogs.pending_import = None;
        if let Some(path) = result {
            import_events.write(ImportRequest { path });
        }
    }
}
