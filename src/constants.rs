//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// World-space distance within which a polygon click closes onto the first vertex
pub const POLYGON_CLOSE_THRESHOLD: f32 = 0.2;

/// Number of accumulated vertices required before a polygon may be closed
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Radius of point markers in world units
pub const MARKER_RADIUS: f32 = 0.05;

/// Opacity of polygon fills
pub const POLYGON_FILL_ALPHA: f32 = 0.3;

/// Maximum distance a pick ray is traced into the scene
pub const MAX_PICK_DISTANCE: f32 = 1000.0;

/// File name suggested by the export dialog
pub const DEFAULT_EXPORT_FILE_NAME: &str = "annotations.json";
