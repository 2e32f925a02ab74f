use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::params::is_cursor_over_ui;

#[derive(Component)]
pub struct EditorCamera;

/// Orbit state: the camera sits on a sphere around `focus`
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    /// Rotation around the Y axis, radians
    pub yaw: f32,
    /// Elevation above the XZ plane, radians
    pub pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::new(0.0, 1.0, 0.0),
            radius: 8.0,
            yaw: 0.6,
            pitch: 0.45,
        }
    }
}

impl OrbitCamera {
    const MIN_RADIUS: f32 = 1.0;
    const MAX_RADIUS: f32 = 100.0;
    const PITCH_LIMIT: f32 = 1.5;

    pub fn transform(&self) -> Transform {
        let offset = Vec3::new(
            self.radius * self.pitch.cos() * self.yaw.sin(),
            self.radius * self.pitch.sin(),
            self.radius * self.pitch.cos() * self.yaw.cos(),
        );
        Transform::from_translation(self.focus + offset).looking_at(self.focus, Vec3::Y)
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * 0.005;
        self.pitch = (self.pitch + delta.y * 0.005).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    pub fn zoom(&mut self, amount: f32) {
        self.radius = (self.radius * (1.0 - amount)).clamp(Self::MIN_RADIUS, Self::MAX_RADIUS);
    }
}

pub fn spawn_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((Camera3d::default(), EditorCamera, orbit, orbit.transform()));
}

/// Right-drag orbits around the focus point
pub fn camera_orbit(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<&mut OrbitCamera, With<EditorCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Right) {
        mouse_motion.clear();
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        orbit.orbit(event.delta);
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut camera_query: Query<&mut OrbitCamera, With<EditorCamera>>,
) {
    if is_cursor_over_ui(&mut contexts) {
        scroll_events.clear();
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let scroll_amount = match event.unit {
            MouseScrollUnit::Line => event.y * 0.1,
            MouseScrollUnit::Pixel => event.y * 0.001,
        };
        orbit.zoom(scroll_amount);
    }
}

pub fn apply_orbit_camera(
    mut camera_query: Query<(&OrbitCamera, &mut Transform), (With<EditorCamera>, Changed<OrbitCamera>)>,
) {
    for (orbit, mut transform) in camera_query.iter_mut() {
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_keeps_radius() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(120.0, -40.0));
        let distance = orbit.transform().translation.distance(orbit.focus);
        assert!((distance - orbit.radius).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..100 {
            orbit.zoom(0.5);
        }
        assert_eq!(orbit.radius, OrbitCamera::MIN_RADIUS);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(0.0, 10_000.0));
        assert_eq!(orbit.pitch, OrbitCamera::PITCH_LIMIT);
    }
}
