//! Component types for drawable entities.

use bevy::prelude::*;

/// Which tool a drawable belongs to. Determines its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawableStyle {
    Measurement,
    Polygon,
    Annotation,
}

impl DrawableStyle {
    pub fn color(&self) -> Color {
        match self {
            DrawableStyle::Measurement => Color::srgb(1.0, 0.0, 0.0),
            DrawableStyle::Polygon => Color::srgb(0.0, 1.0, 0.0),
            DrawableStyle::Annotation => Color::srgb(1.0, 1.0, 0.0),
        }
    }
}

/// A geometric primitive placed in the scene by the annotation tools.
///
/// Positions are in world space; the entity's own transform stays at identity.
#[derive(Component, Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Small sphere marking a picked point
    Marker { position: Vec3, style: DrawableStyle },
    /// Straight line between two points
    Segment {
        start: Vec3,
        end: Vec3,
        style: DrawableStyle,
    },
    /// Translucent surface spanning a closed polygon
    Fill {
        vertices: Vec<Vec3>,
        style: DrawableStyle,
    },
}

impl Drawable {
    pub fn style(&self) -> DrawableStyle {
        match self {
            Drawable::Marker { style, .. }
            | Drawable::Segment { style, .. }
            | Drawable::Fill { style, .. } => *style,
        }
    }
}
