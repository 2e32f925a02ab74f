//! Input and request systems driving the annotation editor.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::messages::{
    CancelAnnotationRequest, ClearAllRequest, ConfirmAnnotationRequest, SetModeRequest,
};
use super::params::{CameraParams, EditorState, egui_wants_keyboard, is_cursor_over_ui};
use super::picking::{PickTarget, pick_point};
use super::tools::{AnnotationMode, PickOutcome, ToolSession};

/// Primary click picks a world point for the active tool
pub fn handle_pick(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
    camera: CameraParams,
    targets: Query<(&GlobalTransform, &PickTarget)>,
    mut state: EditorState,
    mut commands: Commands,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(ray) = camera.cursor_ray() else {
        return;
    };

    let Some(point) = pick_point(ray, targets.iter()) else {
        debug!("Pick missed scene geometry");
        return;
    };

    match state.editor(&mut commands).pick(point) {
        PickOutcome::Ignored => {}
        PickOutcome::Accumulated => debug!("Point added at {:?}", point),
        PickOutcome::AwaitingText => debug!("Awaiting annotation text at {:?}", point),
        PickOutcome::Completed(shape) => debug!("Shape completed: {:?}", shape),
    }
}

/// M/P/A select tools, Esc returns to idle or cancels pending annotation text
pub fn handle_mode_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    session: Res<ToolSession>,
    mut mode_requests: MessageWriter<SetModeRequest>,
    mut cancel_requests: MessageWriter<CancelAnnotationRequest>,
) {
    if egui_wants_keyboard(&mut contexts) {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl {
        return;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        if session.is_awaiting_text() {
            cancel_requests.write(CancelAnnotationRequest);
        } else {
            mode_requests.write(SetModeRequest {
                mode: AnnotationMode::Idle,
            });
        }
        return;
    }

    let mode = if keyboard.just_pressed(KeyCode::KeyM) {
        AnnotationMode::Measuring
    } else if keyboard.just_pressed(KeyCode::KeyP) {
        AnnotationMode::DrawingPolygon
    } else if keyboard.just_pressed(KeyCode::KeyA) {
        AnnotationMode::Annotating
    } else {
        return;
    };

    mode_requests.write(SetModeRequest { mode });
}

pub fn handle_set_mode(
    mut requests: MessageReader<SetModeRequest>,
    mut state: EditorState,
    mut commands: Commands,
) {
    for request in requests.read() {
        state.editor(&mut commands).set_mode(request.mode);
    }
}

pub fn handle_clear_all(
    mut requests: MessageReader<ClearAllRequest>,
    mut state: EditorState,
    mut commands: Commands,
) {
    for _ in requests.read() {
        state.editor(&mut commands).clear_all();
    }
}

pub fn handle_confirm_annotation(
    mut requests: MessageReader<ConfirmAnnotationRequest>,
    mut state: EditorState,
    mut commands: Commands,
) {
    for request in requests.read() {
        if !state.editor(&mut commands).confirm_annotation(&request.text) {
            debug!("Annotation not added: no pending point or blank text");
        }
    }
}

pub fn handle_cancel_annotation(
    mut requests: MessageReader<CancelAnnotationRequest>,
    mut state: EditorState,
    mut commands: Commands,
) {
    for _ in requests.read() {
        if state.editor(&mut commands).cancel_annotation() {
            debug!("Pending annotation cancelled");
        }
    }
}
