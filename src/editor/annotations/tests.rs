//! Tests for the annotation store.

use bevy::prelude::*;

use super::store::StoredEntity;
use super::{Annotation, AnnotationStore, EntityKind, Measurement, Polygon};
use crate::editor::drawables::{Drawable, dispose_all};

fn drawable_count(world: &mut World) -> usize {
    world.query::<&Drawable>().iter(world).count()
}

fn square() -> Polygon {
    Polygon::new(vec![
        Vec3::ZERO,
        Vec3::X,
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::Z,
    ])
    .unwrap()
}

#[test]
fn test_add_materializes_owned_drawables() {
    let mut world = World::new();
    let mut store = AnnotationStore::default();

    let m = store.add_measurement(&mut world, Measurement::new(Vec3::ZERO, Vec3::X));
    let p = store.add_polygon(&mut world, square());
    let a = store.add_annotation(&mut world, Annotation::new(Vec3::Y, "door").unwrap());

    assert_eq!(m.drawables.len(), 3);
    // 4 markers, 4 edges, 1 fill
    assert_eq!(p.drawables.len(), 9);
    assert_eq!(a.drawables.len(), 1);

    assert_eq!(store.entity_count(), 3);
    assert_eq!(store.drawable_count(), 13);
    assert_eq!(drawable_count(&mut world), 13);
    assert_eq!(store.owner_of(p.drawables[0]), Some(p.id));
    assert_eq!(store.drawables_of(m.id), m.drawables.as_slice());
}

#[test]
fn test_remove_last_pops_most_recent_of_kind() {
    let mut world = World::new();
    let mut store = AnnotationStore::default();

    let first = store.add_measurement(&mut world, Measurement::new(Vec3::ZERO, Vec3::X));
    store.add_annotation(&mut world, Annotation::new(Vec3::Y, "note").unwrap());
    let second = store.add_measurement(&mut world, Measurement::new(Vec3::ZERO, Vec3::Y));

    let removed = store.remove_last(EntityKind::Measurement).unwrap();
    assert_eq!(removed.id, second.id);
    assert_eq!(removed.drawables, second.drawables);
    assert_eq!(
        removed.entity,
        StoredEntity::Measurement(Measurement::new(Vec3::ZERO, Vec3::Y))
    );

    // Drawables stay in the scene until disposed
    assert_eq!(drawable_count(&mut world), 7);
    assert_eq!(dispose_all(&mut world, removed.drawables), 0);
    assert_eq!(drawable_count(&mut world), 4);

    assert_eq!(store.count(EntityKind::Measurement), 1);
    assert_eq!(store.drawables_of(first.id).len(), 3);
    assert!(store.remove_last(EntityKind::Polygon).is_none());
}

#[test]
fn test_clear_returns_snapshot_and_every_handle() {
    let mut world = World::new();
    let mut store = AnnotationStore::default();

    store.add_measurement(&mut world, Measurement::new(Vec3::ZERO, Vec3::X));
    store.add_polygon(&mut world, square());

    let cleared = store.clear();
    assert!(store.is_empty());
    assert_eq!(store.drawable_count(), 0);
    assert_eq!(cleared.drawables.len(), 12);
    assert_eq!(cleared.snapshot.measurements.len(), 1);
    assert_eq!(cleared.snapshot.polygons, vec![square()]);

    dispose_all(&mut world, cleared.drawables);
    assert_eq!(drawable_count(&mut world), 0);
}

#[test]
fn test_restore_preserves_order() {
    let mut world = World::new();
    let mut store = AnnotationStore::default();

    store.add_annotation(&mut world, Annotation::new(Vec3::X, "first").unwrap());
    store.add_annotation(&mut world, Annotation::new(Vec3::Y, "second").unwrap());
    store.add_measurement(&mut world, Measurement::new(Vec3::ZERO, Vec3::Z));

    let snapshot = store.clear_and_dispose(&mut world);
    assert_eq!(drawable_count(&mut world), 0);

    store.restore(&mut world, &snapshot);
    assert_eq!(store.snapshot(), snapshot);
    let texts: Vec<&str> = store.annotations().map(Annotation::text).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(drawable_count(&mut world), 5);
}

#[test]
fn test_clear_and_dispose_tolerates_missing_handles() {
    let mut world = World::new();
    let mut store = AnnotationStore::default();

    let m = store.add_measurement(&mut world, Measurement::new(Vec3::ZERO, Vec3::X));
    world.despawn(m.drawables[2]);

    let snapshot = store.clear_and_dispose(&mut world);
    assert_eq!(snapshot.entity_count(), 1);
    assert_eq!(drawable_count(&mut world), 0);
}
