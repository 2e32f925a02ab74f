//! The annotation editor: tools, committed entities, history and rendering.
//!
//! ## Module Structure
//!
//! - [`annotations`] - Committed entities and the [`AnnotationStore`]
//! - [`drawables`] - Scene drawables and their rendering
//! - [`tools`] - Tool state machine ([`ToolSession`])
//! - [`history`] - Undo/redo log
//! - [`actions`] - [`AnnotationEditor`] facade tying the above together
//! - [`picking`] - Cursor ray to world point
//! - [`messages`] - Requests accepted by the editor

mod actions;
pub mod annotations;
mod camera;
mod conditions;
mod demo_scene;
pub mod drawables;
pub mod history;
pub mod messages;
pub mod params;
mod picking;
mod systems;
pub mod tools;

pub use annotations::{AnnotationStore, StoreSnapshot};
pub use camera::EditorCamera;
pub use history::CommandHistory;
pub use messages::{
    CancelAnnotationRequest, ClearAllRequest, ConfirmAnnotationRequest, RedoRequest,
    SetModeRequest, UndoRequest,
};
pub use tools::{AnnotationMode, ToolSession};

use bevy::prelude::*;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ToolSession>()
            .init_resource::<AnnotationStore>()
            .init_resource::<CommandHistory>()
            .add_message::<SetModeRequest>()
            .add_message::<ClearAllRequest>()
            .add_message::<UndoRequest>()
            .add_message::<RedoRequest>()
            .add_message::<ConfirmAnnotationRequest>()
            .add_message::<CancelAnnotationRequest>()
            .init_gizmo_group::<drawables::AnnotationGizmoGroup>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    demo_scene::spawn_demo_scene,
                    drawables::configure_annotation_gizmos,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                ),
            )
            .add_systems(
                Update,
                (
                    systems::handle_mode_shortcuts,
                    history::handle_history_shortcuts.run_if(conditions::no_dialog_open),
                    systems::handle_set_mode.run_if(on_message::<SetModeRequest>),
                    systems::handle_pick
                        .run_if(conditions::tool_active)
                        .run_if(conditions::no_dialog_open),
                    systems::handle_confirm_annotation
                        .run_if(on_message::<ConfirmAnnotationRequest>),
                    systems::handle_cancel_annotation.run_if(on_message::<CancelAnnotationRequest>),
                    systems::handle_clear_all.run_if(on_message::<ClearAllRequest>),
                    history::handle_undo.run_if(on_message::<UndoRequest>),
                    history::handle_redo.run_if(on_message::<RedoRequest>),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    drawables::attach_fill_meshes,
                    drawables::render_drawables,
                    drawables::render_tool_preview,
                ),
            );
    }
}
