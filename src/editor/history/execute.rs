//! Execute functions for undo/redo operations.

use bevy::prelude::*;

use super::command_history::CommandHistory;
use super::commands::HistoryAction;
use crate::editor::annotations::AnnotationStore;
use crate::editor::drawables::{SceneContainer, dispose_all};

/// Reverse the last applied action. Returns false when there is nothing to undo.
pub fn execute_undo(
    history: &mut CommandHistory,
    store: &mut AnnotationStore,
    scene: &mut impl SceneContainer,
) -> bool {
    let Some(action) = history.undo_target() else {
        return false;
    };

    match action {
        HistoryAction::Clear { snapshot } => {
            store.restore(scene, snapshot);
            info!("Undo: restored {} cleared entities", snapshot.entity_count());
        }
        creation => {
            let (Some(kind), Some(slot)) = (creation.created_kind(), creation.slot()) else {
                return false;
            };

            let removed = store.remove_last(kind);
            let mut disposed: Vec<Entity> = Vec::new();
            match removed {
                Some(removed) => {
                    if removed.id != slot.id {
                        warn!(
                            "Undo {}: removed {:?} but history recorded {:?}",
                            creation.description(),
                            removed.id,
                            slot.id
                        );
                    }
                    debug!("Undo removed {:?}", removed.entity);
                    disposed = removed.drawables;
                }
                None => warn!(
                    "Undo {}: no {} left in the store",
                    creation.description(),
                    kind.display_name()
                ),
            }

            // Recorded handles nobody owns anymore
            let stray: Vec<Entity> = slot
                .drawables
                .iter()
                .copied()
                .filter(|handle| !disposed.contains(handle) && store.owner_of(*handle).is_none())
                .collect();
            disposed.extend(stray);

            let missing = dispose_all(scene, disposed);
            if missing > 0 {
                warn!("Undo {}: {} drawables were already gone", creation.description(), missing);
            }
            debug!("Undo: {}", creation.description());
        }
    }

    history.step_back();
    true
}

/// Re-apply the next undone action. Returns false when there is nothing to redo.
pub fn execute_redo(
    history: &mut CommandHistory,
    store: &mut AnnotationStore,
    scene: &mut impl SceneContainer,
) -> bool {
    let Some(action) = history.redo_target_mut() else {
        return false;
    };

    match action {
        HistoryAction::Measure { measurement, slot } => {
            *slot = store.add_measurement(scene, *measurement);
        }
        HistoryAction::Polygon { polygon, slot } => {
            *slot = store.add_polygon(scene, polygon.clone());
        }
        HistoryAction::Annotate { annotation, slot } => {
            *slot = store.add_annotation(scene, annotation.clone());
        }
        HistoryAction::Clear { snapshot } => {
            *snapshot = store.clear_and_dispose(scene);
        }
    }
    debug!("Redo: {}", action.description());

    history.step_forward();
    true
}
