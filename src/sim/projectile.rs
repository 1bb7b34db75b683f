//! Projectiles: straight-line damage packets fired by ships

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::{Kinematics, Motion};
use crate::consts::*;
use crate::facing_dir;

/// Weapon kind; each kind is a row of data, not a behavior hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Slow-moving long-range bolt
    #[default]
    Laser,
    /// Fast short-range round
    Bullet,
}

impl WeaponKind {
    pub fn damage(self) -> i32 {
        match self {
            WeaponKind::Laser => LASER_DAMAGE,
            WeaponKind::Bullet => BULLET_DAMAGE,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            WeaponKind::Laser => LASER_RADIUS,
            WeaponKind::Bullet => BULLET_RADIUS,
        }
    }

    /// Default shots per second; ships copy this into their own stats
    pub fn fire_rate(self) -> f32 {
        match self {
            WeaponKind::Laser => LASER_FIRE_RATE,
            WeaponKind::Bullet => BULLET_FIRE_RATE,
        }
    }

    /// Design parameter combined with fire rate to derive projectile speed
    pub fn spacing(self) -> f32 {
        match self {
            WeaponKind::Laser => LASER_SPACING,
            WeaponKind::Bullet => BULLET_SPACING,
        }
    }

    /// Weapon-switch cycle order
    pub fn next(self) -> Self {
        match self {
            WeaponKind::Laser => WeaponKind::Bullet,
            WeaponKind::Bullet => WeaponKind::Laser,
        }
    }

    /// HUD display name
    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Laser => "LASER",
            WeaponKind::Bullet => "BULLET",
        }
    }
}

/// A fired projectile; velocity is fixed at spawn and never rotates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kinematics: Kinematics,
    pub motion: Motion,
    pub damage: i32,
    pub kind: WeaponKind,
}

impl Projectile {
    /// Create a projectile at `position` heading along `rotation_deg` at
    /// `speed` pixels/s.
    pub fn fire(kind: WeaponKind, position: Vec2, rotation_deg: f32, speed: f32) -> Self {
        Self {
            kinematics: Kinematics::at(position),
            motion: Motion {
                velocity: facing_dir(rotation_deg) * speed,
                angular_velocity: 0.0,
            },
            damage: kind.damage(),
            kind,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.position
    }

    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    /// Advance one step; returns false once outside `[0,w]x[0,h]` (no radius
    /// margin, unlike asteroids).
    pub fn update(&mut self, dt: f32, screen: Vec2) -> bool {
        self.kinematics.integrate(&self.motion, dt);
        let pos = self.kinematics.position;
        pos.x >= 0.0 && pos.x <= screen.x && pos.y >= 0.0 && pos.y <= screen.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_damage_by_kind() {
        let laser = Projectile::fire(WeaponKind::Laser, Vec2::ZERO, 0.0, 100.0);
        let bullet = Projectile::fire(WeaponKind::Bullet, Vec2::ZERO, 0.0, 100.0);
        assert_eq!(laser.damage, 20);
        assert_eq!(bullet.damage, 10);
        assert_eq!(laser.radius(), 2.0);
        assert_eq!(bullet.radius(), 5.0);
    }

    #[test]
    fn test_fire_speed_is_spacing_times_rate() {
        for kind in [WeaponKind::Laser, WeaponKind::Bullet] {
            let speed = kind.spacing() * kind.fire_rate();
            let p = Projectile::fire(kind, Vec2::new(100.0, 100.0), 37.0, speed);
            assert!((p.motion.velocity.length() - speed).abs() < 1e-3);
        }
    }

    #[test]
    fn test_fire_direction_follows_rotation() {
        let p = Projectile::fire(WeaponKind::Bullet, Vec2::ZERO, 90.0, 200.0);
        // 90 degrees faces right (+x)
        assert!(p.motion.velocity.abs_diff_eq(Vec2::new(200.0, 0.0), 1e-3));
    }

    #[test]
    fn test_update_culls_off_screen() {
        let screen = Vec2::new(800.0, 600.0);
        let mut p = Projectile::fire(WeaponKind::Bullet, Vec2::new(400.0, 5.0), 0.0, 720.0);
        // Facing up at 720 px/s; one second carries it well past the top edge
        assert!(!p.update(1.0, screen));
    }

    #[test]
    fn test_update_keeps_on_screen() {
        let screen = Vec2::new(800.0, 600.0);
        let mut p = Projectile::fire(WeaponKind::Laser, Vec2::new(400.0, 300.0), 0.0, 720.0);
        assert!(p.update(1.0 / 60.0, screen));
    }

    #[test]
    fn test_weapon_cycle() {
        assert_eq!(WeaponKind::Laser.next(), WeaponKind::Bullet);
        assert_eq!(WeaponKind::Bullet.next(), WeaponKind::Laser);
    }
}
