//! Geometric value types for committed annotation entities.
//!
//! These are pure data: they never hold drawable handles, so they can be
//! snapshotted into history actions and exported as-is.

use bevy::prelude::*;

use crate::constants::MIN_POLYGON_VERTICES;

/// The three kinds of entity the annotation store keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Measurement,
    Polygon,
    Annotation,
}

impl EntityKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Measurement => "measurement",
            EntityKind::Polygon => "polygon",
            EntityKind::Annotation => "annotation",
        }
    }
}

/// Format a distance the way it is shown in labels and written to exports.
pub fn format_distance(distance: f32) -> String {
    format!("{:.2}", distance)
}

/// Distance between two picked points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    start: Vec3,
    end: Vec3,
    distance: f32,
}

impl Measurement {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            distance: start.distance(end),
        }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    pub fn points(&self) -> [Vec3; 2] {
        [self.start, self.end]
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Distance rounded to two decimals, e.g. `"5.00"`
    pub fn distance_label(&self) -> String {
        format_distance(self.distance)
    }

    pub fn midpoint(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }
}

/// Closed polygon. Vertex order is perimeter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec3>,
}

impl Polygon {
    /// Returns `None` for fewer than three vertices.
    pub fn new(vertices: Vec<Vec3>) -> Option<Self> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return None;
        }
        Some(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Perimeter edges including the closing edge back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let count = self.vertices.len();
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % count]))
    }

    /// Unit normal computed with Newell's method; `Vec3::Y` for degenerate input.
    pub fn normal(&self) -> Vec3 {
        let mut normal = Vec3::ZERO;
        for (a, b) in self.edges() {
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        normal.try_normalize().unwrap_or(Vec3::Y)
    }

    /// Triangle fan anchored at the first vertex.
    pub fn fan_triangles(&self) -> Vec<[Vec3; 3]> {
        let first = self.vertices[0];
        self.vertices[1..]
            .windows(2)
            .map(|pair| [first, pair[0], pair[1]])
            .collect()
    }
}

/// Text label attached to a point in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Where the label is drawn
    position: Vec3,
    /// The picked world point the indicator marks
    world_position: Vec3,
    text: String,
}

impl Annotation {
    /// Annotation created by picking: label and indicator share the picked point.
    ///
    /// Returns `None` when the text is blank.
    pub fn new(anchor: Vec3, text: impl Into<String>) -> Option<Self> {
        Self::with_anchors(anchor, anchor, text)
    }

    pub fn with_anchors(
        position: Vec3,
        world_position: Vec3,
        text: impl Into<String>,
    ) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            position,
            world_position,
            text,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn world_position(&self) -> Vec3 {
        self.world_position
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_distance_label() {
        let measurement = Measurement::new(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(measurement.distance(), 5.0);
        assert_eq!(measurement.distance_label(), "5.00");
    }

    #[test]
    fn test_measurement_label_rounds_to_two_decimals() {
        let measurement = Measurement::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(measurement.distance_label(), "1.41");
    }

    #[test]
    fn test_measurement_midpoint() {
        let measurement = Measurement::new(Vec3::ZERO, Vec3::new(2.0, 4.0, -6.0));
        assert_eq!(measurement.midpoint(), Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_polygon_requires_three_vertices() {
        assert!(Polygon::new(vec![Vec3::ZERO, Vec3::X]).is_none());
        assert!(Polygon::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y]).is_some());
    }

    #[test]
    fn test_polygon_edges_include_closing_edge() {
        let polygon = Polygon::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
        let edges: Vec<_> = polygon.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Vec3::Y, Vec3::ZERO));
    }

    #[test]
    fn test_polygon_normal_counter_clockwise_in_xy_plane() {
        let polygon = Polygon::new(vec![
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        assert!((polygon.normal() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_polygon_normal_degenerate_falls_back() {
        let polygon = Polygon::new(vec![Vec3::ZERO, Vec3::X, Vec3::X * 2.0]).unwrap();
        assert_eq!(polygon.normal(), Vec3::Y);
    }

    #[test]
    fn test_fan_triangles() {
        let polygon = Polygon::new(vec![Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y]).unwrap();
        let triangles = polygon.fan_triangles();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[1], [Vec3::ZERO, Vec3::ONE, Vec3::Y]);
    }

    #[test]
    fn test_annotation_rejects_blank_text() {
        assert!(Annotation::new(Vec3::ZERO, "   ").is_none());
        assert!(Annotation::new(Vec3::ZERO, "").is_none());
    }

    #[test]
    fn test_annotation_keeps_text_and_shares_anchor() {
        let annotation = Annotation::new(Vec3::ONE, " door ").unwrap();
        assert_eq!(annotation.text(), " door ");
        assert_eq!(annotation.position(), annotation.world_position());
    }
}
