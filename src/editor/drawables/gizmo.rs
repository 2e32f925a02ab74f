//! Custom gizmo group for annotation drawables.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

/// Gizmo group used for markers, segments and tool previews
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct AnnotationGizmoGroup;

/// Draw annotation lines thicker than the default and in front of scene geometry
pub fn configure_annotation_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<AnnotationGizmoGroup>();
    config.line.width = 3.0;
    config.depth_bias = -0.5;
}
