mod annotation_input;
mod dialogs;
mod file_dialogs;
mod labels;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigResetNotification;
use crate::editor::ToolSession;
use crate::persistence::FileOperationError;

pub use file_dialogs::FileDialogState;

/// Resource that tracks whether any modal dialog is currently open.
/// Editor input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block editor input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    session: Res<ToolSession>,
    config_reset: Res<ConfigResetNotification>,
    file_error: Res<FileOperationError>,
    file_dialogs: Res<FileDialogState>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = session.is_awaiting_text()
        || config_reset.show
        || file_error.message.is_some()
        || file_dialogs.any_pending();
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<FileDialogState>()
            .init_resource::<annotation_input::AnnotationInputState>()
            .add_systems(
                EguiPrimaryContextPass,
                (toolbar::toolbar_ui, toolbar::tool_hint_ui).chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Labels sit under any dialogs drawn afterwards
                    labels::labels_ui,
                    annotation_input::annotation_input_ui,
                    dialogs::file_error_dialog_ui,
                    dialogs::config_reset_notification_ui,
                    dialogs::async_operation_indicator_ui,
                )
                    .chain()
                    .after(toolbar::tool_hint_ui),
            )
            .add_systems(Update, file_dialogs::poll_file_dialogs)
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
