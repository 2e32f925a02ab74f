//! Drawable factory: turns committed geometry into scene drawables.

use bevy::prelude::*;

use super::components::{Drawable, DrawableStyle};
use super::scene::SceneContainer;
use crate::editor::annotations::{Annotation, Measurement, Polygon};

pub fn spawn_marker(
    scene: &mut impl SceneContainer,
    position: Vec3,
    style: DrawableStyle,
) -> Entity {
    scene.add_drawable(Drawable::Marker { position, style })
}

pub fn spawn_segment(
    scene: &mut impl SceneContainer,
    start: Vec3,
    end: Vec3,
    style: DrawableStyle,
) -> Entity {
    scene.add_drawable(Drawable::Segment { start, end, style })
}

/// Two endpoint markers and the connecting line
pub fn spawn_measurement(scene: &mut impl SceneContainer, measurement: &Measurement) -> Vec<Entity> {
    let style = DrawableStyle::Measurement;
    vec![
        spawn_marker(scene, measurement.start(), style),
        spawn_marker(scene, measurement.end(), style),
        spawn_segment(scene, measurement.start(), measurement.end(), style),
    ]
}

/// One marker per vertex, one line per edge and the fill
pub fn spawn_polygon(scene: &mut impl SceneContainer, polygon: &Polygon) -> Vec<Entity> {
    let style = DrawableStyle::Polygon;
    let mut handles = Vec::with_capacity(polygon.vertices().len() * 2 + 1);

    for vertex in polygon.vertices() {
        handles.push(spawn_marker(scene, *vertex, style));
    }
    for (start, end) in polygon.edges() {
        handles.push(spawn_segment(scene, start, end, style));
    }
    handles.push(scene.add_drawable(Drawable::Fill {
        vertices: polygon.vertices().to_vec(),
        style,
    }));

    handles
}

/// Indicator marker at the picked point. The text itself is drawn as a screen-space label.
pub fn spawn_annotation(scene: &mut impl SceneContainer, annotation: &Annotation) -> Vec<Entity> {
    vec![spawn_marker(
        scene,
        annotation.world_position(),
        DrawableStyle::Annotation,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawables(world: &mut World) -> Vec<Drawable> {
        world.query::<&Drawable>().iter(world).cloned().collect()
    }

    #[test]
    fn test_spawn_measurement_creates_two_markers_and_a_line() {
        let mut world = World::new();
        let measurement = Measurement::new(Vec3::ZERO, Vec3::X);
        let handles = spawn_measurement(&mut world, &measurement);

        assert_eq!(handles.len(), 3);
        let spawned = drawables(&mut world);
        let markers = spawned
            .iter()
            .filter(|d| matches!(d, Drawable::Marker { .. }))
            .count();
        let segments = spawned
            .iter()
            .filter(|d| matches!(d, Drawable::Segment { .. }))
            .count();
        assert_eq!(markers, 2);
        assert_eq!(segments, 1);
        assert!(
            spawned
                .iter()
                .all(|d| d.style() == DrawableStyle::Measurement)
        );
    }

    #[test]
    fn test_spawn_polygon_counts() {
        let mut world = World::new();
        let polygon = Polygon::new(vec![Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y]).unwrap();
        let handles = spawn_polygon(&mut world, &polygon);

        // 4 markers + 4 edges + 1 fill
        assert_eq!(handles.len(), 9);
        let fills = drawables(&mut world)
            .into_iter()
            .filter(|d| matches!(d, Drawable::Fill { .. }))
            .count();
        assert_eq!(fills, 1);
    }

    #[test]
    fn test_spawn_annotation_marks_world_position() {
        let mut world = World::new();
        let annotation =
            Annotation::with_anchors(Vec3::new(0.0, 2.0, 0.0), Vec3::ONE, "label").unwrap();
        let handles = spawn_annotation(&mut world, &annotation);

        assert_eq!(handles.len(), 1);
        assert_eq!(
            world.get::<Drawable>(handles[0]),
            Some(&Drawable::Marker {
                position: Vec3::ONE,
                style: DrawableStyle::Annotation,
            })
        );
    }
}
