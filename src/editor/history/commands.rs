//! History action enum for undo/redo operations.

use crate::editor::annotations::{
    Annotation, EntityKind, Materialized, Measurement, Polygon, StoreSnapshot,
};

/// A reversible change to the annotation store.
///
/// Creation actions keep the value needed to rebuild the entity and a slot
/// holding the drawables currently representing it. The slot is rewritten each
/// time the action is redone.
#[derive(Clone, Debug)]
pub enum HistoryAction {
    /// A measurement was committed
    Measure {
        measurement: Measurement,
        slot: Materialized,
    },
    /// A polygon was closed
    Polygon { polygon: Polygon, slot: Materialized },
    /// A text annotation was confirmed
    Annotate {
        annotation: Annotation,
        slot: Materialized,
    },
    /// The store was emptied; holds everything it contained
    Clear { snapshot: StoreSnapshot },
}

impl HistoryAction {
    /// Kind of entity created by this action, `None` for Clear
    pub fn created_kind(&self) -> Option<EntityKind> {
        match self {
            HistoryAction::Measure { .. } => Some(EntityKind::Measurement),
            HistoryAction::Polygon { .. } => Some(EntityKind::Polygon),
            HistoryAction::Annotate { .. } => Some(EntityKind::Annotation),
            HistoryAction::Clear { .. } => None,
        }
    }

    /// Handle slot of a creation action
    pub fn slot(&self) -> Option<&Materialized> {
        match self {
            HistoryAction::Measure { slot, .. }
            | HistoryAction::Polygon { slot, .. }
            | HistoryAction::Annotate { slot, .. } => Some(slot),
            HistoryAction::Clear { .. } => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HistoryAction::Measure { .. } => "Measure",
            HistoryAction::Polygon { .. } => "Polygon",
            HistoryAction::Annotate { .. } => "Annotate",
            HistoryAction::Clear { .. } => "Clear all",
        }
    }
}
