//! Kinematic primitives shared by every moving entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position and heading
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Vec2,
    /// Degrees, 0 = up, clockwise positive
    pub rotation: f32,
}

/// Linear and angular velocity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub velocity: Vec2,
    /// Degrees per second
    pub angular_velocity: f32,
}

impl Kinematics {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
        }
    }

    /// Advance position and rotation by one step. Pure; `dt` is not clamped.
    pub fn integrate(&mut self, motion: &Motion, dt: f32) {
        self.position += motion.velocity * dt;
        self.rotation += motion.angular_velocity * dt;
    }
}
