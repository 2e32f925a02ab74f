//! The annotation store: canonical list of committed entities.

use bevy::prelude::*;

use super::geometry::{Annotation, EntityKind, Measurement, Polygon};
use super::ownership::{AnnotationId, OwnershipTable};
use crate::editor::drawables::{
    SceneContainer, dispose_all, spawn_annotation, spawn_measurement, spawn_polygon,
};

/// A stored value tagged with its identifier
#[derive(Debug, Clone)]
struct Entry<T> {
    id: AnnotationId,
    value: T,
}

/// Any committed entity, by kind
#[derive(Debug, Clone, PartialEq)]
pub enum StoredEntity {
    Measurement(Measurement),
    Polygon(Polygon),
    Annotation(Annotation),
}

/// Result of adding an entity: its id and the drawables now representing it
#[derive(Debug, Clone, PartialEq)]
pub struct Materialized {
    pub id: AnnotationId,
    pub drawables: Vec<Entity>,
}

/// An entity popped by [`AnnotationStore::remove_last`]
#[derive(Debug)]
pub struct RemovedEntity {
    pub id: AnnotationId,
    pub entity: StoredEntity,
    pub drawables: Vec<Entity>,
}

/// Everything [`AnnotationStore::clear`] took out of the store
#[derive(Debug)]
pub struct ClearedStore {
    pub snapshot: StoreSnapshot,
    pub drawables: Vec<Entity>,
}

/// Drawable-free copy of the store contents, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub measurements: Vec<Measurement>,
    pub polygons: Vec<Polygon>,
    pub annotations: Vec<Annotation>,
}

impl StoreSnapshot {
    pub fn entity_count(&self) -> usize {
        self.measurements.len() + self.polygons.len() + self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }
}

/// Committed measurements, polygons and annotations.
///
/// Every add goes through a [`SceneContainer`] so the drawables and the
/// ownership entry are created together.
#[derive(Resource, Debug, Default)]
pub struct AnnotationStore {
    measurements: Vec<Entry<Measurement>>,
    polygons: Vec<Entry<Polygon>>,
    annotations: Vec<Entry<Annotation>>,
    ownership: OwnershipTable,
    next_id: u64,
}

impl AnnotationStore {
    fn allocate_id(&mut self) -> AnnotationId {
        self.next_id += 1;
        AnnotationId(self.next_id)
    }

    fn claim(&mut self, id: AnnotationId, drawables: Vec<Entity>) -> Materialized {
        self.ownership.claim(id, drawables.clone());
        Materialized { id, drawables }
    }

    pub fn add_measurement(
        &mut self,
        scene: &mut impl SceneContainer,
        measurement: Measurement,
    ) -> Materialized {
        let id = self.allocate_id();
        let drawables = spawn_measurement(scene, &measurement);
        self.measurements.push(Entry {
            id,
            value: measurement,
        });
        self.claim(id, drawables)
    }

    pub fn add_polygon(&mut self, scene: &mut impl SceneContainer, polygon: Polygon) -> Materialized {
        let id = self.allocate_id();
        let drawables = spawn_polygon(scene, &polygon);
        self.polygons.push(Entry { id, value: polygon });
        self.claim(id, drawables)
    }

    pub fn add_annotation(
        &mut self,
        scene: &mut impl SceneContainer,
        annotation: Annotation,
    ) -> Materialized {
        let id = self.allocate_id();
        let drawables = spawn_annotation(scene, &annotation);
        self.annotations.push(Entry {
            id,
            value: annotation,
        });
        self.claim(id, drawables)
    }

    /// Pop the most recent entity of `kind`.
    ///
    /// The drawables are released from the ownership table but left in the
    /// scene; the caller disposes them.
    pub fn remove_last(&mut self, kind: EntityKind) -> Option<RemovedEntity> {
        let (id, entity) = match kind {
            EntityKind::Measurement => self
                .measurements
                .pop()
                .map(|e| (e.id, StoredEntity::Measurement(e.value))),
            EntityKind::Polygon => self
                .polygons
                .pop()
                .map(|e| (e.id, StoredEntity::Polygon(e.value))),
            EntityKind::Annotation => self
                .annotations
                .pop()
                .map(|e| (e.id, StoredEntity::Annotation(e.value))),
        }?;

        let drawables = self.ownership.release(id);
        Some(RemovedEntity {
            id,
            entity,
            drawables,
        })
    }

    /// Empty all three collections at once
    pub fn clear(&mut self) -> ClearedStore {
        let snapshot = self.snapshot();
        self.measurements.clear();
        self.polygons.clear();
        self.annotations.clear();
        let drawables = self.ownership.release_all();
        ClearedStore {
            snapshot,
            drawables,
        }
    }

    /// Clear the store and dispose every drawable it owned
    pub fn clear_and_dispose(&mut self, scene: &mut impl SceneContainer) -> StoreSnapshot {
        let cleared = self.clear();
        let missing = dispose_all(scene, cleared.drawables);
        if missing > 0 {
            warn!("{} drawables were already gone while clearing", missing);
        }
        cleared.snapshot
    }

    /// Re-materialize every entity in a snapshot, preserving its order
    pub fn restore(&mut self, scene: &mut impl SceneContainer, snapshot: &StoreSnapshot) {
        for measurement in &snapshot.measurements {
            self.add_measurement(scene, *measurement);
        }
        for polygon in &snapshot.polygons {
            self.add_polygon(scene, polygon.clone());
        }
        for annotation in &snapshot.annotations {
            self.add_annotation(scene, annotation.clone());
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            measurements: self.measurements.iter().map(|e| e.value).collect(),
            polygons: self.polygons.iter().map(|e| e.value.clone()).collect(),
            annotations: self.annotations.iter().map(|e| e.value.clone()).collect(),
        }
    }

    pub fn measurements(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().map(|e| &e.value)
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().map(|e| &e.value)
    }

    #[cfg(test)]
    pub fn drawables_of(&self, id: AnnotationId) -> &[Entity] {
        self.ownership.handles(id)
    }

    pub fn owner_of(&self, handle: Entity) -> Option<AnnotationId> {
        self.ownership.owner_of(handle)
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Measurement => self.measurements.len(),
            EntityKind::Polygon => self.polygons.len(),
            EntityKind::Annotation => self.annotations.len(),
        }
    }

    pub fn entity_count(&self) -> usize {
        self.measurements.len() + self.polygons.len() + self.annotations.len()
    }

    #[cfg(test)]
    pub fn drawable_count(&self) -> usize {
        self.ownership.handle_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }
}
