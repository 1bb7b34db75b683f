//! Polydrift - a top-down arcade asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: Draw pass over the simulation state, behind a primitive trait
//!
//! Coordinates are screen space: origin top-left, +y down. Rotations are in
//! degrees, 0 pointing up, increasing clockwise.

pub mod render;
pub mod sim;

pub use render::{DrawTarget, render_frame};
pub use sim::{GameState, TickInput, tick};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the demo driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default screen extent
    pub const SCREEN_WIDTH: f32 = 1600.0;
    pub const SCREEN_HEIGHT: f32 = 1600.0;

    /// Asteroid population cap; spawn attempts at the cap are skipped
    pub const MAX_ASTEROIDS: usize = 150;
    /// Spawn interval bounds (seconds), redrawn after every spawn
    pub const SPAWN_INTERVAL_MIN: f32 = 0.5;
    pub const SPAWN_INTERVAL_MAX: f32 = 3.0;

    /// Asteroid drift speed bounds (pixels/s)
    pub const ASTEROID_SPEED_MIN: f32 = 125.0;
    pub const ASTEROID_SPEED_MAX: f32 = 250.0;
    /// Asteroid spin bounds (degrees/s)
    pub const ASTEROID_SPIN_MIN: f32 = 50.0;
    pub const ASTEROID_SPIN_MAX: f32 = 240.0;
    /// Radius of a size-tier-1 asteroid; scales linearly with the tier
    pub const ASTEROID_UNIT_RADIUS: f32 = 16.0;
    /// Asteroids aim at a point within this fraction of min(w,h) of center
    pub const DRIFT_TARGET_FRACTION: f32 = 0.1;

    /// Ship defaults
    pub const SHIP_HP: i32 = 100;
    pub const SHIP_SPEED: f32 = 250.0;
    /// Root ship turn rate (degrees/s)
    pub const SHIP_TURN_RATE: f32 = 180.0;
    pub const PLAYER_RADIUS: f32 = 40.0;
    pub const ORBITER_RADIUS: f32 = 24.0;

    /// Per-weapon fire rate (shots/s) and spacing; projectile speed is their product
    pub const LASER_FIRE_RATE: f32 = 18.0;
    pub const BULLET_FIRE_RATE: f32 = 22.0;
    pub const LASER_SPACING: f32 = 40.0;
    pub const BULLET_SPACING: f32 = 20.0;

    pub const LASER_DAMAGE: i32 = 20;
    pub const BULLET_DAMAGE: i32 = 10;
    pub const LASER_RADIUS: f32 = 2.0;
    pub const BULLET_RADIUS: f32 = 5.0;
    /// Visual length of the laser bolt rect
    pub const LASER_LENGTH: f32 = 30.0;

    /// Score at which a ship without orbiters grafts one
    pub const ORBITER_SCORE_THRESHOLD: i32 = 3;
    /// Orbit distance beyond the parent's radius
    pub const ORBIT_GAP: f32 = 60.0;
    /// Orbit angular rate (radians/s), independent of any stored spin
    pub const ORBIT_RATE: f32 = 1.0;

    /// Dead root ship blink cycle (seconds); drawn during the first half
    pub const DEATH_BLINK_PERIOD: f32 = 0.4;
}

/// Opaque handle to a texture owned by the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Unit vector for a rotation in degrees (0 = up, clockwise positive)
#[inline]
pub fn facing_dir(rotation_deg: f32) -> Vec2 {
    let r = rotation_deg.to_radians();
    Vec2::new(r.sin(), -r.cos())
}
