//! Collision detection and resolution
//!
//! Two ordered passes per frame, both after motion updates: projectiles
//! against asteroids (scoring), then ships against asteroids (damage). An
//! asteroid leaves the field through exactly one path per frame: ship
//! contact, or the off-screen cull folded into its motion update.

use glam::Vec2;

use super::state::GameState;

/// Circle overlap: strict inequality against the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Pass 1: each live projectile scans asteroids in creation order and kills
/// at most one. The living ship nearest the impact point takes the score.
/// Matched pairs are removed in place with an advance-only-on-miss cursor so
/// later entries keep their scan order.
pub fn resolve_projectile_hits(state: &mut GameState) {
    let mut pi = 0;
    while pi < state.projectiles.len() {
        let pos = state.projectiles[pi].position();
        let radius = state.projectiles[pi].radius();
        let hit = state
            .asteroids
            .iter()
            .position(|ast| circles_overlap(pos, radius, ast.position(), ast.radius()));
        match hit {
            Some(ai) => {
                state.player.credit_kill(pos);
                state.asteroids.remove(ai);
                state.projectiles.remove(pi);
            }
            None => pi += 1,
        }
    }
}

/// Pass 2: each asteroid checks the ship tree (preorder, root first); the
/// first living ship within range takes the asteroid's damage and the
/// asteroid is destroyed. Asteroids that touch no ship integrate normally
/// and may be culled off-screen instead.
pub fn resolve_ship_hits(state: &mut GameState, dt: f32) {
    let screen = state.screen;
    let player = &mut state.player;
    state.asteroids.retain_mut(|ast| {
        if player.damage_first_in_range(ast.position(), ast.radius(), ast.damage()) {
            return false;
        }
        ast.update(dt, screen)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextureId;
    use crate::consts::*;
    use crate::sim::asteroid::{Asteroid, AsteroidShape, SizeTier};
    use crate::sim::kinematics::{Kinematics, Motion};
    use crate::sim::projectile::{Projectile, WeaponKind};

    fn state() -> GameState {
        GameState::new(
            1,
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            TextureId::default(),
        )
    }

    fn asteroid_at(position: Vec2, size: SizeTier, shape: AsteroidShape) -> Asteroid {
        Asteroid {
            kinematics: Kinematics::at(position),
            motion: Motion::default(),
            size,
            shape,
        }
    }

    #[test]
    fn test_projectile_hit_at_sum_of_radii_boundary() {
        let eps = 0.01;
        let base = Vec2::new(400.0, 400.0);

        // Centers at radius_p + radius_a - eps: both removed, score +1
        let mut state = state();
        let ast = asteroid_at(base, SizeTier::Small, AsteroidShape::Triangle);
        let gap = BULLET_RADIUS + ast.radius() - eps;
        state.asteroids.push(ast);
        state.projectiles.push(Projectile::fire(
            WeaponKind::Bullet,
            base + Vec2::new(gap, 0.0),
            0.0,
            0.0,
        ));
        resolve_projectile_hits(&mut state);
        assert!(state.asteroids.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.player.score, 1);

        // Centers at radius_p + radius_a + eps: neither removed
        let mut state = self::state();
        let ast = asteroid_at(base, SizeTier::Small, AsteroidShape::Triangle);
        let gap = BULLET_RADIUS + ast.radius() + eps;
        state.asteroids.push(ast);
        state.projectiles.push(Projectile::fire(
            WeaponKind::Bullet,
            base + Vec2::new(gap, 0.0),
            0.0,
            0.0,
        ));
        resolve_projectile_hits(&mut state);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.player.score, 0);
    }

    #[test]
    fn test_projectile_kills_at_most_one_asteroid() {
        let mut state = state();
        let pos = Vec2::new(400.0, 400.0);
        // Two overlapping asteroids; the first in creation order dies
        state
            .asteroids
            .push(asteroid_at(pos, SizeTier::Small, AsteroidShape::Triangle));
        state
            .asteroids
            .push(asteroid_at(pos, SizeTier::Small, AsteroidShape::Square));
        state
            .projectiles
            .push(Projectile::fire(WeaponKind::Bullet, pos, 0.0, 0.0));

        resolve_projectile_hits(&mut state);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.asteroids[0].shape, AsteroidShape::Square);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.player.score, 1);
    }

    #[test]
    fn test_missing_projectiles_survive_the_pass() {
        let mut state = state();
        state.projectiles.push(Projectile::fire(
            WeaponKind::Laser,
            Vec2::new(100.0, 100.0),
            0.0,
            0.0,
        ));
        resolve_projectile_hits(&mut state);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_ship_contact_damages_and_destroys_asteroid() {
        let mut state = state();
        // Small triangle directly adjacent to the player: 5 damage
        state.asteroids.push(asteroid_at(
            state.player.position() + Vec2::new(10.0, 0.0),
            SizeTier::Small,
            AsteroidShape::Triangle,
        ));
        resolve_ship_hits(&mut state, 1.0 / 60.0);
        assert_eq!(state.player.hp, SHIP_HP - 5);
        assert!(state.asteroids.is_empty());
    }

    #[test]
    fn test_untouched_asteroid_integrates_instead() {
        let mut state = state();
        let mut ast = asteroid_at(
            Vec2::new(100.0, 100.0),
            SizeTier::Medium,
            AsteroidShape::Square,
        );
        ast.motion.velocity = Vec2::new(60.0, 0.0);
        state.asteroids.push(ast);

        resolve_ship_hits(&mut state, 1.0);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.asteroids[0].position(), Vec2::new(160.0, 100.0));
        assert_eq!(state.player.hp, SHIP_HP);
    }

    #[test]
    fn test_dead_ship_is_transparent_to_asteroids() {
        let mut state = state();
        state.player.take_damage(SHIP_HP);
        state.asteroids.push(asteroid_at(
            state.player.position(),
            SizeTier::Large,
            AsteroidShape::Pentagon,
        ));
        let hp = state.player.hp;
        resolve_ship_hits(&mut state, 1.0 / 60.0);
        // No living ship matched: the asteroid stays (still on-screen)
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.player.hp, hp);
    }

    #[test]
    fn test_off_screen_asteroid_culled_in_ship_pass() {
        let mut state = state();
        state.asteroids.push(asteroid_at(
            Vec2::new(SCREEN_WIDTH / 2.0, -1000.0),
            SizeTier::Small,
            AsteroidShape::Triangle,
        ));
        resolve_ship_hits(&mut state, 1.0 / 60.0);
        assert!(state.asteroids.is_empty());
    }
}
