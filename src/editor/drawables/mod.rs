//! Drawables: the visual objects annotation tools put into the scene.
//!
//! ## Module Structure
//!
//! - [`components`] - The [`Drawable`] component and its styles
//! - [`scene`] - [`SceneContainer`] abstraction and [`dispose_all`]
//! - [`spawn_helpers`] - Drawable factory for committed geometry
//! - [`gizmo`] - Gizmo group configuration
//! - [`rendering`] - Gizmo and mesh rendering systems

mod components;
mod gizmo;
mod rendering;
mod scene;
mod spawn_helpers;

// Re-exports - Components
pub use components::{Drawable, DrawableStyle};

// Re-exports - Scene
pub use scene::{SceneContainer, dispose_all};

// Re-exports - Factory
pub use spawn_helpers::{
    spawn_annotation, spawn_marker, spawn_measurement, spawn_polygon, spawn_segment,
};

// Re-exports - Rendering
pub use gizmo::{AnnotationGizmoGroup, configure_annotation_gizmos};
pub use rendering::{attach_fill_meshes, render_drawables, render_tool_preview};
