//! Per-frame simulation step
//!
//! `tick` advances the whole simulation by one frame in a fixed internal
//! order: movement first, then firing and spawning, then the two collision
//! passes, then orbiter promotion.

use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, ShapeSelector};
use super::collision;
use super::state::{GameState, roll_spawn_interval};
use crate::consts::*;

/// Input snapshot for a single frame, polled by the windowing collaborator
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    /// Held, not edge-triggered
    pub fire_held: bool,
    /// Pressed this frame: cycle LASER/BULLET
    pub switch_weapon: bool,
    /// Pressed this frame: respawn a dead player
    pub respawn: bool,
    /// Pressed this frame: force a shape policy for subsequent spawns
    pub select_shape: Option<ShapeSelector>,
}

/// Advance the simulation by one frame. `dt` is integrated as given — no
/// clamping; a frontend that pauses (debugger, tab switch) should clamp its
/// own elapsed time if it wants to hide the jump.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time += dt;
    state.spawn_timer += dt;

    state.player.control(input, dt);
    state.player.update_orbiters(dt);

    if !state.player.alive && input.respawn {
        state.respawn();
    }

    if let Some(shape) = input.select_shape {
        state.shape = shape;
    }
    if input.switch_weapon {
        state.weapon = state.weapon.next();
    }

    if state.player.alive && input.fire_held {
        state
            .player
            .shoot_all(&mut state.projectiles, state.weapon, &mut state.shot_timer, dt);
    } else {
        // Keep the idle trigger inside one interval so resumed fire does not
        // release a backlog burst.
        let interval = state.player.fire_interval(state.weapon);
        if state.shot_timer > interval {
            state.shot_timer %= interval;
        }
    }

    if state.spawn_timer >= state.spawn_interval && state.asteroids.len() < MAX_ASTEROIDS {
        let asteroid = Asteroid::spawn(state.screen, state.shape, &mut state.rng);
        log::debug!(
            "asteroid spawned: {:?} {:?} at {:?}",
            asteroid.size,
            asteroid.shape,
            asteroid.position()
        );
        state.asteroids.push(asteroid);
        state.spawn_timer = 0.0;
        state.spawn_interval = roll_spawn_interval(&mut state.rng);
    }

    let screen = state.screen;
    state.projectiles.retain_mut(|p| p.update(dt, screen));

    collision::resolve_projectile_hits(state);
    collision::resolve_ship_hits(state, dt);

    state.player.try_spawn_orbiters();
}
