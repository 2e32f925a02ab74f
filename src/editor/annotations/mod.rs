//! Committed annotation entities and the store that owns them.
//!
//! ## Module Structure
//!
//! - [`geometry`] - Value types (Measurement, Polygon, Annotation)
//! - [`ownership`] - Entity ID to drawable handle table
//! - [`store`] - The [`AnnotationStore`] resource
//!
//! ## Entity Types
//!
//! - [`Measurement`]: two points and their distance
//! - [`Polygon`]: three or more points forming a closed outline
//! - [`Annotation`]: free-form text anchored to a picked point

mod geometry;
mod ownership;
mod store;

#[cfg(test)]
mod tests;

// Re-exports - Geometry
pub use geometry::{Annotation, EntityKind, Measurement, Polygon};

// Re-exports - Store
pub use store::{AnnotationStore, Materialized, StoreSnapshot};
