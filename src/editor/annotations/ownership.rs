//! Ownership table mapping stored entities to the drawables that represent them.

use std::collections::BTreeMap;

use bevy::prelude::*;

/// Stable identifier of a committed measurement, polygon or annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnnotationId(pub u64);

/// Entity ID -> drawable handles.
///
/// A handle is owned by at most one entity. The table is the only place the
/// store looks up what to dispose, so removal never depends on scene order.
#[derive(Debug, Default)]
pub struct OwnershipTable {
    owners: BTreeMap<AnnotationId, Vec<Entity>>,
}

impl OwnershipTable {
    pub fn claim(&mut self, id: AnnotationId, handles: Vec<Entity>) {
        debug_assert!(
            !self.owners.contains_key(&id),
            "{id:?} already owns drawables"
        );
        self.owners.insert(id, handles);
    }

    pub fn handles(&self, id: AnnotationId) -> &[Entity] {
        self.owners.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Forget an entity, returning the handles it owned
    pub fn release(&mut self, id: AnnotationId) -> Vec<Entity> {
        self.owners.remove(&id).unwrap_or_default()
    }

    pub fn release_all(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.owners)
            .into_values()
            .flatten()
            .collect()
    }

    pub fn owner_of(&self, handle: Entity) -> Option<AnnotationId> {
        self.owners
            .iter()
            .find(|(_, handles)| handles.contains(&handle))
            .map(|(id, _)| *id)
    }

    #[cfg(test)]
    pub fn handle_count(&self) -> usize {
        self.owners.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
