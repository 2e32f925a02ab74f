//! Scene container abstraction.
//!
//! Annotation code never spawns or despawns drawables directly; it goes through
//! [`SceneContainer`] so the same logic runs against deferred [`Commands`] inside
//! systems and against a bare [`World`] in tests.

use bevy::prelude::*;

use super::components::Drawable;

/// Something that can hold drawable entities.
pub trait SceneContainer {
    /// Insert a drawable into the scene and return its handle
    fn add_drawable(&mut self, drawable: Drawable) -> Entity;

    /// Remove a drawable. Returns false when the handle no longer exists.
    fn remove_drawable(&mut self, entity: Entity) -> bool;
}

impl SceneContainer for Commands<'_, '_> {
    fn add_drawable(&mut self, drawable: Drawable) -> Entity {
        self.spawn((drawable, Transform::IDENTITY, Visibility::default()))
            .id()
    }

    fn remove_drawable(&mut self, entity: Entity) -> bool {
        match self.get_entity(entity) {
            Ok(mut entity_commands) => {
                entity_commands.despawn();
                true
            }
            Err(_) => false,
        }
    }
}

impl SceneContainer for World {
    fn add_drawable(&mut self, drawable: Drawable) -> Entity {
        self.spawn((drawable, Transform::IDENTITY, Visibility::default()))
            .id()
    }

    fn remove_drawable(&mut self, entity: Entity) -> bool {
        match self.get_entity_mut(entity) {
            Ok(entity_mut) => {
                entity_mut.despawn();
                true
            }
            Err(_) => false,
        }
    }
}

/// Remove every handle from the scene, skipping ones that are already gone.
///
/// Returns the number of handles that were missing.
pub fn dispose_all(
    scene: &mut impl SceneContainer,
    handles: impl IntoIterator<Item = Entity>,
) -> usize {
    let mut missing = 0;
    for entity in handles {
        if !scene.remove_drawable(entity) {
            debug!("Drawable {:?} was already removed from the scene", entity);
            missing += 1;
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::drawables::DrawableStyle;

    fn marker() -> Drawable {
        Drawable::Marker {
            position: Vec3::ONE,
            style: DrawableStyle::Measurement,
        }
    }

    #[test]
    fn test_world_add_and_remove_drawable() {
        let mut world = World::new();
        let entity = world.add_drawable(marker());

        assert_eq!(world.get::<Drawable>(entity), Some(&marker()));
        assert!(world.remove_drawable(entity));
        assert!(world.get_entity(entity).is_err());
    }

    #[test]
    fn test_removing_missing_drawable_is_skipped() {
        let mut world = World::new();
        let entity = world.add_drawable(marker());
        assert!(world.remove_drawable(entity));
        assert!(!world.remove_drawable(entity));
    }

    #[test]
    fn test_dispose_all_counts_missing_handles() {
        let mut world = World::new();
        let first = world.add_drawable(marker());
        let second = world.add_drawable(marker());
        world.remove_drawable(first);

        let missing = dispose_all(&mut world, [first, second]);
        assert_eq!(missing, 1);
        assert!(world.get_entity(second).is_err());
    }
}
