//! Picking: map a cursor ray to a world point on pickable scene geometry.

use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;

use crate::constants::MAX_PICK_DISTANCE;

/// Box-shaped geometry that annotation tools can pick points on.
///
/// `half_extents` are in the entity's local space; the entity's
/// [`GlobalTransform`] places, rotates and scales the box.
#[derive(Component, Debug, Clone, Copy)]
pub struct PickTarget {
    pub half_extents: Vec3,
}

impl PickTarget {
    pub fn cuboid(size: Vec3) -> Self {
        Self {
            half_extents: size * 0.5,
        }
    }
}

/// Intersect a ray with one target, returning the world-space hit point
pub fn ray_hit(ray: Ray3d, transform: &GlobalTransform, target: &PickTarget) -> Option<Vec3> {
    // Work in the box's local space so rotation and scale come for free
    let to_local = transform.affine().inverse();
    let local_origin = to_local.transform_point3(ray.origin);
    let local_direction = Dir3::new(to_local.transform_vector3(*ray.direction)).ok()?;

    let local_ray = RayCast3d::new(local_origin, local_direction, f32::MAX);
    let bounds = Aabb3d::new(Vec3::ZERO, target.half_extents);
    let distance = local_ray.aabb_intersection_at(&bounds)?;

    let local_hit = local_origin + *local_direction * distance;
    Some(transform.transform_point(local_hit))
}

/// Nearest hit along the ray among all targets, if any is within range
pub fn pick_point<'a>(
    ray: Ray3d,
    targets: impl IntoIterator<Item = (&'a GlobalTransform, &'a PickTarget)>,
) -> Option<Vec3> {
    targets
        .into_iter()
        .filter_map(|(transform, target)| ray_hit(ray, transform, target))
        .map(|hit| (hit, hit.distance(ray.origin)))
        .filter(|(_, distance)| *distance <= MAX_PICK_DISTANCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(hit, _)| hit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_ray(x: f32, z: f32) -> Ray3d {
        Ray3d::new(Vec3::new(x, 10.0, z), Dir3::NEG_Y)
    }

    #[test]
    fn test_hits_top_face_of_cube() {
        let transform = GlobalTransform::from(Transform::from_xyz(0.0, 1.0, 0.0));
        let target = PickTarget::cuboid(Vec3::splat(2.0));

        let hit = ray_hit(down_ray(0.5, 0.5), &transform, &target).unwrap();
        assert!((hit - Vec3::new(0.5, 2.0, 0.5)).length() < 1e-4);
    }

    #[test]
    fn test_miss_returns_none() {
        let transform = GlobalTransform::from(Transform::from_xyz(0.0, 1.0, 0.0));
        let target = PickTarget::cuboid(Vec3::splat(2.0));
        assert!(ray_hit(down_ray(5.0, 0.0), &transform, &target).is_none());
    }

    #[test]
    fn test_scaled_target() {
        let transform =
            GlobalTransform::from(Transform::from_scale(Vec3::new(1.0, 4.0, 1.0)));
        let target = PickTarget::cuboid(Vec3::ONE);

        let hit = ray_hit(down_ray(0.0, 0.0), &transform, &target).unwrap();
        assert!((hit.y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_pick_point_prefers_nearest() {
        let cube = (
            GlobalTransform::from(Transform::from_xyz(0.0, 1.0, 0.0)),
            PickTarget::cuboid(Vec3::splat(2.0)),
        );
        let ground = (
            GlobalTransform::from(Transform::from_xyz(0.0, -0.05, 0.0)),
            PickTarget::cuboid(Vec3::new(20.0, 0.1, 20.0)),
        );
        let targets = [cube, ground];

        let on_cube = pick_point(down_ray(0.0, 0.0), targets.iter().map(|(t, p)| (t, p)));
        assert!((on_cube.unwrap().y - 2.0).abs() < 1e-4);

        let on_ground = pick_point(down_ray(5.0, 5.0), targets.iter().map(|(t, p)| (t, p)));
        assert!(on_ground.unwrap().y.abs() < 1e-4);
    }
}
