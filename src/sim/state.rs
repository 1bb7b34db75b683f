//! Game state owned by the simulation loop
//!
//! All state that matters for determinism lives here: the entity collections,
//! the seeded RNG, and every per-frame timer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, ShapeSelector};
use super::projectile::{Projectile, WeaponKind};
use super::ship::Ship;
use crate::TextureId;
use crate::consts::*;

/// Read-only HUD values exposed to the rendering collaborator each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub hp: i32,
    pub weapon: &'static str,
    pub score: i32,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Process-wide uniform generator, seeded once at startup
    pub rng: Pcg32,
    /// Screen extent used for spawn placement and culling
    pub screen: Vec2,
    /// Total simulated time (drives the dead-root blink)
    pub time: f32,
    /// Root of the ship tree
    pub player: Ship,
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    /// Currently selected weapon, shared by the whole tree
    pub weapon: WeaponKind,
    /// Shape policy for subsequent asteroid spawns
    pub shape: ShapeSelector,
    pub spawn_timer: f32,
    pub spawn_interval: f32,
    /// Shared firing accumulator threaded through the recursive fire call
    pub shot_timer: f32,
}

impl GameState {
    pub fn new(seed: u64, screen: Vec2, ship_texture: TextureId) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_interval = roll_spawn_interval(&mut rng);
        Self {
            seed,
            rng,
            screen,
            time: 0.0,
            player: Ship::player(screen, ship_texture),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            weapon: WeaponKind::Laser,
            shape: ShapeSelector::Triangle,
            spawn_timer: 0.0,
            spawn_interval,
            shot_timer: 0.0,
        }
    }

    /// Recreate the player at screen center and clear the field. The shared
    /// firing timer is deliberately left as-is.
    pub fn respawn(&mut self) {
        log::info!("respawn (final score {})", self.player.score);
        self.player = Ship::player(self.screen, self.player.texture);
        self.asteroids.clear();
        self.projectiles.clear();
        self.spawn_timer = 0.0;
        self.spawn_interval = roll_spawn_interval(&mut self.rng);
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            hp: self.player.hp,
            weapon: self.weapon.name(),
            score: self.player.score,
        }
    }
}

/// Draw the next asteroid spawn interval
pub fn roll_spawn_interval(rng: &mut Pcg32) -> f32 {
    rng.random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(
            42,
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            TextureId::default(),
        )
    }

    #[test]
    fn test_new_state_player_at_center() {
        let state = state();
        assert_eq!(
            state.player.position(),
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
        );
        assert!(state.player.alive);
        assert_eq!(state.player.hp, SHIP_HP);
        assert!(
            (SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX).contains(&state.spawn_interval)
        );
    }

    #[test]
    fn test_hud_snapshot() {
        let mut state = state();
        state.player.score = 7;
        state.weapon = WeaponKind::Bullet;
        let hud = state.hud();
        assert_eq!(hud.hp, SHIP_HP);
        assert_eq!(hud.weapon, "BULLET");
        assert_eq!(hud.score, 7);
    }

    #[test]
    fn test_respawn_clears_field_and_keeps_shot_timer() {
        let mut state = state();
        state.player.take_damage(SHIP_HP);
        state.shot_timer = 0.03;
        state.asteroids.push(crate::sim::Asteroid::spawn(
            state.screen,
            ShapeSelector::Random,
            &mut state.rng,
        ));

        state.respawn();
        assert!(state.player.alive);
        assert!(state.asteroids.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.shot_timer, 0.03);
    }

    #[test]
    fn test_state_serde_round_trip() {
        let state = state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, state.seed);
        assert_eq!(back.player.position(), state.player.position());
        assert_eq!(back.spawn_interval, state.spawn_interval);
    }
}
