//! Rendering systems for drawables.
//!
//! Markers and segments are immediate-mode gizmos redrawn every frame from the
//! [`Drawable`] components. Fills need real geometry, so a mesh is attached when
//! a fill drawable first appears.

use bevy::asset::RenderAssetUsages;
use bevy::math::Isometry3d;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use super::components::{Drawable, DrawableStyle};
use super::gizmo::AnnotationGizmoGroup;
use crate::constants::{MARKER_RADIUS, POLYGON_FILL_ALPHA};
use crate::editor::annotations::Polygon;
use crate::editor::params::CameraParams;
use crate::editor::picking::{PickTarget, pick_point};
use crate::editor::tools::{AnnotationMode, ToolSession};

pub fn render_drawables(mut gizmos: Gizmos<AnnotationGizmoGroup>, drawables: Query<&Drawable>) {
    for drawable in drawables.iter() {
        let color = drawable.style().color();
        match drawable {
            Drawable::Marker { position, .. } => {
                gizmos.sphere(Isometry3d::from_translation(*position), MARKER_RADIUS, color);
            }
            Drawable::Segment { start, end, .. } => {
                gizmos.line(*start, *end, color);
            }
            Drawable::Fill { .. } => {}
        }
    }
}

/// Preview line from the last in-progress point to the point under the cursor
pub fn render_tool_preview(
    mut gizmos: Gizmos<AnnotationGizmoGroup>,
    session: Res<ToolSession>,
    camera: CameraParams,
    targets: Query<(&GlobalTransform, &PickTarget)>,
) {
    let style = match session.mode() {
        AnnotationMode::Measuring => DrawableStyle::Measurement,
        AnnotationMode::DrawingPolygon => DrawableStyle::Polygon,
        AnnotationMode::Idle | AnnotationMode::Annotating => return,
    };

    let Some(last) = session.in_progress_points().last().copied() else {
        return;
    };

    let Some(ray) = camera.cursor_ray() else {
        return;
    };

    let Some(hovered) = pick_point(ray, targets.iter()) else {
        return;
    };

    gizmos.line(last, hovered, style.color().with_alpha(0.5));
}

/// Build a double-sided-ready triangle list covering the polygon
pub fn build_fill_mesh(vertices: &[Vec3]) -> Option<Mesh> {
    let polygon = Polygon::new(vertices.to_vec())?;
    let normal = polygon.normal().to_array();

    let positions: Vec<[f32; 3]> = polygon
        .fan_triangles()
        .iter()
        .flat_map(|triangle| triangle.map(|v| v.to_array()))
        .collect();
    let normals = vec![normal; positions.len()];

    Some(
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals),
    )
}

/// Attach a translucent mesh to every newly spawned fill drawable
pub fn attach_fill_meshes(
    mut commands: Commands,
    added: Query<(Entity, &Drawable), Added<Drawable>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, drawable) in added.iter() {
        let Drawable::Fill { vertices, style } = drawable else {
            continue;
        };

        let Some(mesh) = build_fill_mesh(vertices) else {
            warn!("Skipping fill with {} vertices", vertices.len());
            continue;
        };

        let material = StandardMaterial {
            base_color: style.color().with_alpha(POLYGON_FILL_ALPHA),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        };

        commands.entity(entity).insert((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(material)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_mesh_vertex_count() {
        let square = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
        let mesh = build_fill_mesh(&square).unwrap();
        // Two fan triangles, non-indexed
        assert_eq!(mesh.count_vertices(), 6);
    }

    #[test]
    fn test_fill_mesh_rejects_degenerate_input() {
        assert!(build_fill_mesh(&[Vec3::ZERO, Vec3::X]).is_none());
    }
}
