//! Serialized form of the annotation store.
//!
//! ```json
//! {
//!   "measurements": [{ "points": [{"x":0,"y":0,"z":0}, {"x":3,"y":4,"z":0}], "distance": "5.00" }],
//!   "annotations": [{ "position": {..}, "worldPosition": {..}, "text": "Door" }],
//!   "polygons": [{ "points": [{..}, {..}, {..}] }]
//! }
//! ```

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{ExportError, ImportError};
use crate::constants::MIN_POLYGON_VERTICES;
use crate::editor::StoreSnapshot;
use crate::editor::annotations::{Annotation, Measurement, Polygon};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointData {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for PointData {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<PointData> for Vec3 {
    fn from(p: PointData) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavedMeasurement {
    pub points: Vec<PointData>,
    /// Distance formatted with two decimals
    pub distance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavedAnnotation {
    pub position: PointData,
    #[serde(rename = "worldPosition")]
    pub world_position: PointData,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavedPolygon {
    pub points: Vec<PointData>,
}

/// Root of an annotation file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavedAnnotations {
    pub measurements: Vec<SavedMeasurement>,
    pub annotations: Vec<SavedAnnotation>,
    pub polygons: Vec<SavedPolygon>,
}

fn checked_point(point: PointData, record: &str) -> Result<Vec3, ImportError> {
    let v = Vec3::from(point);
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ImportError::invalid(record, "coordinates must be finite"))
    }
}

fn checked_points(points: &[PointData], record: &str) -> Result<Vec<Vec3>, ImportError> {
    points.iter().map(|p| checked_point(*p, record)).collect()
}

impl SavedAnnotations {
    pub fn from_snapshot(snapshot: &StoreSnapshot) -> Self {
        Self {
            measurements: snapshot
                .measurements
                .iter()
                .map(|m| SavedMeasurement {
                    points: m.points().map(PointData::from).to_vec(),
                    distance: m.distance_label(),
                })
                .collect(),
            annotations: snapshot
                .annotations
                .iter()
                .map(|a| SavedAnnotation {
                    position: a.position().into(),
                    world_position: a.world_position().into(),
                    text: a.text().to_string(),
                })
                .collect(),
            polygons: snapshot
                .polygons
                .iter()
                .map(|p| SavedPolygon {
                    points: p.vertices().iter().copied().map(PointData::from).collect(),
                })
                .collect(),
        }
    }

    /// Validate every record and build the store contents
    pub fn into_snapshot(self) -> Result<StoreSnapshot, ImportError> {
        let mut snapshot = StoreSnapshot::default();

        for (i, saved) in self.measurements.into_iter().enumerate() {
            let record = format!("measurements[{i}]");
            let [start, end] = saved.points.as_slice() else {
                return Err(ImportError::invalid(
                    record,
                    format!("expected 2 points, found {}", saved.points.len()),
                ));
            };
            let distance: f64 = saved.distance.trim().parse().map_err(|_| {
                ImportError::invalid(&record, format!("distance {:?} is not a number", saved.distance))
            })?;
            if !distance.is_finite() {
                return Err(ImportError::invalid(record, "distance must be finite"));
            }
            let start = checked_point(*start, &record)?;
            let end = checked_point(*end, &record)?;
            snapshot.measurements.push(Measurement::new(start, end));
        }

        for (i, saved) in self.polygons.into_iter().enumerate() {
            let record = format!("polygons[{i}]");
            let vertices = checked_points(&saved.points, &record)?;
            let count = vertices.len();
            let polygon = Polygon::new(vertices).ok_or_else(|| {
                ImportError::invalid(
                    &record,
                    format!("expected at least {MIN_POLYGON_VERTICES} points, found {count}"),
                )
            })?;
            snapshot.polygons.push(polygon);
        }

        for (i, saved) in self.annotations.into_iter().enumerate() {
            let record = format!("annotations[{i}]");
            let position = checked_point(saved.position, &record)?;
            let world_position = checked_point(saved.world_position, &record)?;
            let annotation = Annotation::with_anchors(position, world_position, saved.text)
                .ok_or_else(|| ImportError::invalid(&record, "text is empty"))?;
            snapshot.annotations.push(annotation);
        }

        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Parse and validate an annotation document
pub fn parse_annotations(json: &str) -> Result<StoreSnapshot, ImportError> {
    SavedAnnotations::from_json(json)?.into_snapshot()
}

/// Read, parse and validate an annotation file
pub fn read_annotation_file(path: &Path) -> Result<StoreSnapshot, ImportError> {
    let json = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_annotations(&json)
}

/// Serialize store contents and write them to `path`
pub fn write_annotation_file(path: &Path, saved: &SavedAnnotations) -> Result<(), ExportError> {
    let json = saved.to_json()?;
    std::fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
