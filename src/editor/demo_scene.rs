//! The demo scene annotations are drawn on: a cube resting on a ground slab.

use bevy::prelude::*;

use super::picking::PickTarget;

const CUBE_SIZE: f32 = 2.0;
const GROUND_SIZE: Vec3 = Vec3::new(20.0, 0.1, 20.0);

pub fn spawn_demo_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cube_size = Vec3::splat(CUBE_SIZE);
    commands.spawn((
        Name::new("Demo cube"),
        Mesh3d(meshes.add(Cuboid::from_size(cube_size))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.8))),
        Transform::from_xyz(0.0, CUBE_SIZE / 2.0, 0.0),
        PickTarget::cuboid(cube_size),
    ));

    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Cuboid::from_size(GROUND_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.35, 0.35))),
        Transform::from_xyz(0.0, -GROUND_SIZE.y / 2.0, 0.0),
        PickTarget::cuboid(GROUND_SIZE),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Demo scene spawned");
}
