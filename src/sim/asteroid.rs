//! Asteroid entities and the randomized spawner
//!
//! Asteroids drift from just outside a screen edge toward a point near the
//! screen center, spinning as they go, and are culled once fully off-screen.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::kinematics::{Kinematics, Motion};
use crate::consts::*;

/// Asteroid size category; multiplies both radius and contact damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    /// Radius/damage multiplier: 1, 2, 4
    pub fn multiplier(self) -> i32 {
        match self {
            SizeTier::Small => 1,
            SizeTier::Medium => 2,
            SizeTier::Large => 4,
        }
    }

    /// Uniform over the three tiers (not over the multiplier values)
    fn roll(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3u32) {
            0 => SizeTier::Small,
            1 => SizeTier::Medium,
            _ => SizeTier::Large,
        }
    }
}

/// Polygon shape, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidShape {
    Triangle,
    Square,
    Pentagon,
}

impl AsteroidShape {
    pub fn sides(self) -> u32 {
        match self {
            AsteroidShape::Triangle => 3,
            AsteroidShape::Square => 4,
            AsteroidShape::Pentagon => 5,
        }
    }

    /// Contact damage before the size multiplier
    pub fn base_damage(self) -> i32 {
        match self {
            AsteroidShape::Triangle => 5,
            AsteroidShape::Square => 10,
            AsteroidShape::Pentagon => 15,
        }
    }
}

/// Operator-selected shape policy for subsequent spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeSelector {
    #[default]
    Triangle,
    Square,
    Pentagon,
    Random,
}

impl ShapeSelector {
    /// Resolve to a concrete shape; `Random` rolls uniformly over the three.
    pub fn resolve(self, rng: &mut Pcg32) -> AsteroidShape {
        match self {
            ShapeSelector::Triangle => AsteroidShape::Triangle,
            ShapeSelector::Square => AsteroidShape::Square,
            ShapeSelector::Pentagon => AsteroidShape::Pentagon,
            ShapeSelector::Random => match rng.random_range(0..3u32) {
                0 => AsteroidShape::Triangle,
                1 => AsteroidShape::Square,
                _ => AsteroidShape::Pentagon,
            },
        }
    }
}

/// A drifting polygonal hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub kinematics: Kinematics,
    pub motion: Motion,
    pub size: SizeTier,
    pub shape: AsteroidShape,
}

impl Asteroid {
    /// Spawn just outside a uniform random screen edge, aimed at a random
    /// point within `DRIFT_TARGET_FRACTION * min(w, h)` of the center.
    pub fn spawn(screen: Vec2, selector: ShapeSelector, rng: &mut Pcg32) -> Self {
        let size = SizeTier::roll(rng);
        let shape = selector.resolve(rng);
        let radius = ASTEROID_UNIT_RADIUS * size.multiplier() as f32;

        let position = match rng.random_range(0..4u32) {
            0 => Vec2::new(rng.random_range(0.0..screen.x), -radius),
            1 => Vec2::new(screen.x + radius, rng.random_range(0.0..screen.y)),
            2 => Vec2::new(rng.random_range(0.0..screen.x), screen.y + radius),
            _ => Vec2::new(-radius, rng.random_range(0.0..screen.y)),
        };

        // Drift target: uniform angle, uniform radius (not area-uniform)
        let max_offset = screen.x.min(screen.y) * DRIFT_TARGET_FRACTION;
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let offset = rng.random_range(0.0..max_offset);
        let target = screen * 0.5 + Vec2::new(angle.cos(), angle.sin()) * offset;

        let dir = (target - position).normalize_or_zero();
        let speed = rng.random_range(ASTEROID_SPEED_MIN..ASTEROID_SPEED_MAX);

        Self {
            kinematics: Kinematics {
                position,
                rotation: rng.random_range(0.0..360.0),
            },
            motion: Motion {
                velocity: dir * speed,
                angular_velocity: rng.random_range(ASTEROID_SPIN_MIN..ASTEROID_SPIN_MAX),
            },
            size,
            shape,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.position
    }

    pub fn radius(&self) -> f32 {
        ASTEROID_UNIT_RADIUS * self.size.multiplier() as f32
    }

    /// Contact damage dealt to a ship
    pub fn damage(&self) -> i32 {
        self.shape.base_damage() * self.size.multiplier()
    }

    /// Advance one step; returns false once fully off-screen (radius margin
    /// on all four sides), telling the caller to drop it.
    pub fn update(&mut self, dt: f32, screen: Vec2) -> bool {
        self.kinematics.integrate(&self.motion, dt);
        let r = self.radius();
        let pos = self.kinematics.position;
        pos.x >= -r && pos.x <= screen.x + r && pos.y >= -r && pos.y <= screen.y + r
    }
}
