//! Common SystemParam bundles to reduce parameter counts in editor systems.
//!
//! ## Available Bundles
//!
//! - [`CameraParams`]: Camera and window access for cursor rays
//! - [`EditorState`]: Mutable access to the tool session, store and history
//!
//! ## Helper Functions
//!
//! - [`is_cursor_over_ui`]: Check if cursor is over egui UI (for input gating)
//! - [`egui_wants_keyboard`]: Check if egui has keyboard focus

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use super::EditorCamera;
use super::actions::AnnotationEditor;
use super::annotations::AnnotationStore;
use super::history::CommandHistory;
use super::tools::ToolSession;

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// Ray from the camera through the cursor, if the cursor is in the window
    pub fn cursor_ray(&self) -> Option<Ray3d> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world(transform, cursor_pos).ok()
    }

    /// Project a world point to window coordinates
    pub fn world_to_screen(&self, point: Vec3) -> Option<Vec2> {
        let (camera, transform) = self.camera.single().ok()?;
        camera.world_to_viewport(transform, point).ok()
    }
}

/// The three resources every editing operation touches
#[derive(SystemParam)]
pub struct EditorState<'w> {
    pub session: ResMut<'w, ToolSession>,
    pub store: ResMut<'w, AnnotationStore>,
    pub history: ResMut<'w, CommandHistory>,
}

impl EditorState<'_> {
    /// Borrow the editor facade, spawning drawables through `commands`
    pub fn editor<'a, 'cw, 'cs>(
        &'a mut self,
        commands: &'a mut Commands<'cw, 'cs>,
    ) -> AnnotationEditor<'a, Commands<'cw, 'cs>> {
        AnnotationEditor {
            session: &mut self.session,
            store: &mut self.store,
            history: &mut self.history,
            scene: commands,
        }
    }
}

/// Check if cursor is over any egui area (for input gating)
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area() || ctx.wants_pointer_input())
        .unwrap_or(false)
}

/// Check if an egui widget has keyboard focus (e.g. the annotation text field)
pub fn egui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}
