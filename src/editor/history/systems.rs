//! Bevy systems for undo/redo requests and their keyboard shortcuts.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::editor::messages::{RedoRequest, UndoRequest};
use crate::editor::params::{EditorState, egui_wants_keyboard};

/// Turn Ctrl+Z, Ctrl+Y and Ctrl+Shift+Z into history requests
pub fn handle_history_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut undo_requests: MessageWriter<UndoRequest>,
    mut redo_requests: MessageWriter<RedoRequest>,
) {
    if egui_wants_keyboard(&mut contexts) {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    if !ctrl {
        return;
    }

    // Ctrl+Y or Ctrl+Shift+Z = redo
    let redo_pressed = keyboard.just_pressed(KeyCode::KeyY)
        || (shift && keyboard.just_pressed(KeyCode::KeyZ));

    if redo_pressed {
        redo_requests.write(RedoRequest);
    } else if keyboard.just_pressed(KeyCode::KeyZ) {
        undo_requests.write(UndoRequest);
    }
}

pub fn handle_undo(
    mut requests: MessageReader<UndoRequest>,
    mut state: EditorState,
    mut commands: Commands,
) {
    for _ in requests.read() {
        if !state.editor(&mut commands).undo() {
            debug!("Nothing to undo");
        }
    }
}

pub fn handle_redo(
    mut requests: MessageReader<RedoRequest>,
    mut state: EditorState,
    mut commands: Commands,
) {
    for _ in requests.read() {
        if !state.editor(&mut commands).redo() {
            debug!("Nothing to redo");
        }
    }
}
