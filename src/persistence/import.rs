//! Import system and task polling.
//!
//! Reading, parsing and validation run on the IO pool. The store is only
//! touched once a task finishes with a fully valid document, so a bad file
//! never leaves the scene half replaced.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use super::format::read_annotation_file;
use super::messages::ImportRequest;
use super::resources::{AsyncFileOperation, FileOperationError, ImportTask};
use super::results::ImportResult;
use crate::config::UpdateLastImportPathRequest;
use crate::editor::params::EditorState;

/// Starts an async import
pub fn import_system(
    mut commands: Commands,
    mut events: MessageReader<ImportRequest>,
    mut async_op: ResMut<AsyncFileOperation>,
) {
    for event in events.read() {
        // A second import while one is pending is rejected
        if async_op.is_importing {
            warn!("Import already in progress, ignoring {:?}", event.path);
            continue;
        }

        let path = event.path.clone();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("annotations")
            .to_string();

        async_op.is_importing = true;
        async_op.operation_description = Some(format!("Importing {}...", file_name));

        let task = IoTaskPool::get().spawn(async move {
            let outcome = read_annotation_file(&path);
            ImportResult { path, outcome }
        });

        commands.spawn(ImportTask(task));
    }
}

/// Polls import tasks and applies the imported contents on completion
pub fn poll_import_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut ImportTask)>,
    mut async_op: ResMut<AsyncFileOperation>,
    mut import_error: ResMut<FileOperationError>,
    mut state: EditorState,
    mut config_events: MessageWriter<UpdateLastImportPathRequest>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        async_op.is_importing = false;
        async_op.operation_description = None;
        commands.entity(entity).despawn();

        match result.outcome {
            Ok(snapshot) => {
                if snapshot.is_empty() {
                    warn!("{:?} contains no annotations", result.path);
                }
                state.editor(&mut commands).replace_all(&snapshot);
                import_error.message = None;
                info!(
                    "Imported {} entities from {:?}",
                    snapshot.entity_count(),
                    result.path
                );
                config_events.write(UpdateLastImportPathRequest { path: result.path });
            }
            Err(e) => {
                error!("Import failed: {}", e);
                import_error.message = Some(e.to_string());
            }
        }
    }
}
