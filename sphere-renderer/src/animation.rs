use cgmath::{Vector2, Vector3};

use crate::config::DemoConfig;

/// Offset of the circle's center from the origin on both X and Y.
const CIRCLE_CENTER: f32 = 0.5;

/// Per-frame scene state: a sphere orbiting a fixed point in the XY plane.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Radians; grows by `angle_step` every update and is never wrapped.
    pub angle: f64,
    pub angle_step: f64,
    pub radius: f32,
    pub distance: f32,
    pub sphere_position: Vector3<f32>,
    pub window_size: Vector2<f32>,
    configured_window_size: Vector2<f32>,
}

impl AnimationState {
    pub fn new(config: &DemoConfig) -> Self {
        let window_size = Vector2::from(config.window_size);
        Self {
            angle: 0.0,
            angle_step: config.angle_step,
            radius: config.radius,
            distance: config.distance,
            sphere_position: Vector3::new(0.0, 0.0, 0.0),
            window_size,
            configured_window_size: window_size,
        }
    }

    /// Advances one frame. The step is per frame, so `_elapsed_ms` does not
    /// affect the motion.
    pub fn update(&mut self, _elapsed_ms: f64) {
        self.window_size = self.configured_window_size;

        // Move center of sphere in a circle
        let angle = self.angle as f32;
        self.sphere_position = Vector3::new(
            angle.cos() * self.radius + CIRCLE_CENTER,
            angle.sin() * self.radius + CIRCLE_CENTER,
            self.distance,
        );
        self.angle += self.angle_step;
    }
}
