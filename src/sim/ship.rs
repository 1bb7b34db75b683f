//! The ship tree: a controllable root and recursively owned orbiter escorts
//!
//! Each ship exclusively owns its orbiters; there is no back-pointer to the
//! parent, its position is handed down the recursion instead, so a dangling
//! parent is unrepresentable. Pruning is leaf-first: a ship's
//! children are updated and orbited before its own list is compacted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::{Kinematics, Motion};
use super::projectile::{Projectile, WeaponKind};
use super::tick::TickInput;
use crate::consts::*;
use crate::{TextureId, facing_dir};

/// Per-weapon firing parameters carried by every ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Shots per second
    pub fire_rate: f32,
    /// Combined with fire rate to derive projectile speed
    pub spacing: f32,
}

impl WeaponStats {
    fn for_kind(kind: WeaponKind) -> Self {
        Self {
            fire_rate: kind.fire_rate(),
            spacing: kind.spacing(),
        }
    }
}

/// A controllable or orbiting actor. The root ship moves under player input;
/// orbiters circle their parent and fire alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub kinematics: Kinematics,
    pub hp: i32,
    /// Cleared once hp reaches 0; a dead root keeps drifting until respawn,
    /// a dead orbiter is pruned by its parent.
    pub alive: bool,
    pub speed: f32,
    pub radius: f32,
    pub laser: WeaponStats,
    pub bullet: WeaponStats,
    pub score: i32,
    pub texture: TextureId,
    /// Distance from the parent; 0 for the root
    pub orbit_radius: f32,
    /// Radians, advanced at ORBIT_RATE
    pub orbit_angle: f32,
    /// Owned escort subtree
    pub orbiters: Vec<Ship>,
}

impl Ship {
    /// Root ship at screen center
    pub fn player(screen: Vec2, texture: TextureId) -> Self {
        Self::with_radius(screen * 0.5, PLAYER_RADIUS, texture)
    }

    fn with_radius(position: Vec2, radius: f32, texture: TextureId) -> Self {
        Self {
            kinematics: Kinematics::at(position),
            hp: SHIP_HP,
            alive: true,
            speed: SHIP_SPEED,
            radius,
            laser: WeaponStats::for_kind(WeaponKind::Laser),
            bullet: WeaponStats::for_kind(WeaponKind::Bullet),
            score: 0,
            texture,
            orbit_radius: 0.0,
            orbit_angle: 0.0,
            orbiters: Vec::new(),
        }
    }

    fn orbiter(parent_position: Vec2, orbit_radius: f32, texture: TextureId) -> Self {
        let mut ship = Self::with_radius(
            parent_position + Vec2::new(orbit_radius, 0.0),
            ORBITER_RADIUS,
            texture,
        );
        ship.orbit_radius = orbit_radius;
        ship
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.position
    }

    pub fn weapon(&self, kind: WeaponKind) -> &WeaponStats {
        match kind {
            WeaponKind::Laser => &self.laser,
            WeaponKind::Bullet => &self.bullet,
        }
    }

    /// Seconds between shots
    pub fn fire_interval(&self, kind: WeaponKind) -> f32 {
        1.0 / self.weapon(kind).fire_rate
    }

    pub fn projectile_speed(&self, kind: WeaponKind) -> f32 {
        let stats = self.weapon(kind);
        stats.spacing * stats.fire_rate
    }

    /// Apply damage; a dead ship ignores further hits.
    pub fn take_damage(&mut self, damage: i32) {
        if !self.alive {
            return;
        }
        self.hp -= damage;
        if self.hp <= 0 {
            self.alive = false;
            log::debug!("ship destroyed at {:?}", self.kinematics.position);
        }
    }

    /// Root-only movement: axis translation and rotation while alive, a slow
    /// downward corpse drift once dead.
    pub fn control(&mut self, input: &TickInput, dt: f32) {
        if self.alive {
            if input.move_up {
                self.kinematics.position.y -= self.speed * dt;
            }
            if input.move_down {
                self.kinematics.position.y += self.speed * dt;
            }
            if input.move_left {
                self.kinematics.position.x -= self.speed * dt;
            }
            if input.move_right {
                self.kinematics.position.x += self.speed * dt;
            }
            if input.rotate_ccw {
                self.kinematics.rotation -= SHIP_TURN_RATE * dt;
            }
            if input.rotate_cw {
                self.kinematics.rotation += SHIP_TURN_RATE * dt;
            }
        } else {
            self.kinematics.position.y += self.speed * dt;
        }
    }

    /// Advance every orbiter: orbit angle and position first, then its own
    /// subtree, then prune the dead. Order matters; pruning is leaf-first.
    pub fn update_orbiters(&mut self, dt: f32) {
        let parent_pos = self.kinematics.position;
        for orb in &mut self.orbiters {
            orb.orbit_angle += dt * ORBIT_RATE;
            orb.kinematics.position = parent_pos
                + orb.orbit_radius * Vec2::new(orb.orbit_angle.cos(), orb.orbit_angle.sin());
            orb.update_orbiters(dt);
        }
        self.orbiters.retain(|orb| orb.alive);
    }

    /// Fire from this ship and every descendant, threading one shared timer
    /// through the whole tree: each node adds `dt`, drains whole intervals,
    /// and passes the decremented value on. A dead ship stops its branch.
    pub fn shoot_all(
        &self,
        projectiles: &mut Vec<Projectile>,
        weapon: WeaponKind,
        shot_timer: &mut f32,
        dt: f32,
    ) {
        if !self.alive {
            return;
        }
        *shot_timer += dt;
        let interval = self.fire_interval(weapon);
        let speed = self.projectile_speed(weapon);
        while *shot_timer >= interval {
            let muzzle =
                self.kinematics.position + facing_dir(self.kinematics.rotation) * self.radius;
            projectiles.push(Projectile::fire(
                weapon,
                muzzle,
                self.kinematics.rotation,
                speed,
            ));
            *shot_timer -= interval;
        }
        for orb in &self.orbiters {
            orb.shoot_all(projectiles, weapon, shot_timer, dt);
        }
    }

    /// Preorder walk over the whole tree, root first
    pub fn for_each_ship<'a>(&'a self, f: &mut impl FnMut(&'a Ship)) {
        f(self);
        for orb in &self.orbiters {
            orb.for_each_ship(f);
        }
    }

    fn ship_by_index_mut(&mut self, index: usize) -> Option<&mut Ship> {
        fn walk<'a>(ship: &'a mut Ship, index: usize, counter: &mut usize) -> Option<&'a mut Ship> {
            if *counter == index {
                return Some(ship);
            }
            *counter += 1;
            for orb in &mut ship.orbiters {
                if let Some(found) = walk(orb, index, counter) {
                    return Some(found);
                }
            }
            None
        }
        let mut counter = 0;
        walk(self, index, &mut counter)
    }

    /// Award one point to the living ship nearest `impact` (first minimum in
    /// preorder wins). Returns false if no ship in the tree is alive.
    pub fn credit_kill(&mut self, impact: Vec2) -> bool {
        let mut best: Option<(usize, f32)> = None;
        let mut index = 0;
        self.for_each_ship(&mut |ship| {
            if ship.alive {
                let dist = ship.kinematics.position.distance(impact);
                if best.is_none_or(|(_, d)| dist < d) {
                    best = Some((index, dist));
                }
            }
            index += 1;
        });
        match best {
            Some((index, _)) => {
                if let Some(ship) = self.ship_by_index_mut(index) {
                    ship.score += 1;
                }
                true
            }
            None => false,
        }
    }

    /// Damage the first living ship (preorder, root first) within
    /// `ship.radius + radius` of `center`. Returns whether one was hit.
    pub fn damage_first_in_range(&mut self, center: Vec2, radius: f32, damage: i32) -> bool {
        if self.alive && self.kinematics.position.distance(center) < self.radius + radius {
            self.take_damage(damage);
            return true;
        }
        self.orbiters
            .iter_mut()
            .any(|orb| orb.damage_first_in_range(center, radius, damage))
    }

    /// Graft one orbiter onto any ship in the tree whose score has reached
    /// the threshold and whose orbiter list is empty. Runs every frame; a
    /// ship that lost its orbiters regrows one while its score qualifies.
    pub fn try_spawn_orbiters(&mut self) {
        if self.score >= ORBITER_SCORE_THRESHOLD && self.orbiters.is_empty() {
            let orbit_radius = self.radius + ORBIT_GAP;
            log::info!(
                "orbiter joins at distance {} (score {})",
                orbit_radius,
                self.score
            );
            self.orbiters.push(Ship::orbiter(
                self.kinematics.position,
                orbit_radius,
                self.texture,
            ));
        }
        for orb in &mut self.orbiters {
            orb.try_spawn_orbiters();
        }
    }

    /// Number of ships in the tree, this one included
    pub fn tree_len(&self) -> usize {
        1 + self.orbiters.iter().map(Ship::tree_len).sum::<usize>()
    }
}
