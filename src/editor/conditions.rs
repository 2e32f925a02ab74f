//! Run conditions for controlling when editor systems execute.

use bevy::prelude::*;

use crate::editor::tools::{AnnotationMode, ToolSession};
use crate::ui::DialogState;

/// Run condition: returns true when a tool other than idle is active.
///
/// Usage: `.run_if(tool_active)`
pub fn tool_active(session: Res<ToolSession>) -> bool {
    session.mode() != AnnotationMode::Idle
}

/// Run condition: returns true when no modal dialog is open.
///
/// Use this to prevent editor input handlers from processing when
/// the user is interacting with a dialog.
///
/// Usage: `.run_if(no_dialog_open)`
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}
