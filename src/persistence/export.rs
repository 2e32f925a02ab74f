//! Export system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use super::format::{SavedAnnotations, write_annotation_file};
use super::messages::ExportRequest;
use super::resources::{AsyncFileOperation, ExportTask, FileOperationError};
use super::results::ExportResult;
use crate::config::UpdateLastExportPathRequest;
use crate::editor::AnnotationStore;

/// Snapshots the store and writes it out on the IO pool
pub fn export_system(
    mut commands: Commands,
    mut events: MessageReader<ExportRequest>,
    store: Res<AnnotationStore>,
    mut async_op: ResMut<AsyncFileOperation>,
) {
    for event in events.read() {
        if async_op.is_exporting {
            warn!("Export already in progress");
            continue;
        }

        let snapshot = store.snapshot();
        let count = snapshot.entity_count();
        let saved = SavedAnnotations::from_snapshot(&snapshot);
        let path = event.path.clone();

        async_op.is_exporting = true;
        async_op.operation_description = Some(format!("Exporting {} entities...", count));

        let task = IoTaskPool::get().spawn(async move {
            let outcome = write_annotation_file(&path, &saved).map(|()| count);
            ExportResult { path, outcome }
        });

        commands.spawn(ExportTask(task));
    }
}

pub fn poll_export_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut ExportTask)>,
    mut async_op: ResMut<AsyncFileOperation>,
    mut export_error: ResMut<FileOperationError>,
    mut config_events: MessageWriter<UpdateLastExportPathRequest>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        async_op.is_exporting = false;
        async_op.operation_description = None;
        commands.entity(entity).despawn();

        match result.outcome {
            Ok(count) => {
                info!("Exported {} entities to {:?}", count, result.path);
                config_events.write(UpdateLastExportPathRequest { path: result.path });
            }
            Err(e) => {
                error!("Export failed: {}", e);
                export_error.message = Some(e.to_string());
            }
        }
    }
}
