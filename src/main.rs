//! Polydrift entry point
//!
//! Runs a seeded headless demo: a scripted pilot holds fire and circles while
//! the field fills with asteroids, logging the HUD once per simulated second.
//! A windowed frontend would drive `tick`/`render_frame` the same way with
//! real elapsed time and polled input.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use polydrift::consts::*;
use polydrift::render::{DrawTarget, render_frame};
use polydrift::sim::{GameState, TickInput, tick};
use polydrift::TextureId;

/// Counts primitive draw calls instead of rasterizing them
#[derive(Debug, Default)]
struct DrawStats {
    polygons: u64,
    circles: u64,
    rects: u64,
    sprites: u64,
}

impl DrawTarget for DrawStats {
    fn draw_polygon_outline(&mut self, _: Vec2, _: u32, _: f32, _: f32) {
        self.polygons += 1;
    }
    fn draw_filled_circle(&mut self, _: Vec2, _: f32) {
        self.circles += 1;
    }
    fn draw_filled_rect(&mut self, _: Vec2, _: Vec2) {
        self.rects += 1;
    }
    fn draw_sprite(&mut self, _: TextureId, _: Vec2, _: Vec2, _: f32) {
        self.sprites += 1;
    }
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("polydrift demo starting, seed {seed}");

    // The demo has no real textures; a frontend would load the ship sprite
    // here and abort on failure.
    let ship_texture = TextureId(1);
    let mut state = GameState::new(
        seed,
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ship_texture,
    );

    let mut draws = DrawStats::default();
    let seconds = 30;
    let frames_per_second = (1.0 / SIM_DT) as u64;

    for second in 0..seconds {
        for frame in 0..frames_per_second {
            let input = TickInput {
                fire_held: true,
                rotate_cw: true,
                // Sweep the field in a square-ish patrol
                move_up: second % 4 == 0,
                move_right: second % 4 == 1,
                move_down: second % 4 == 2,
                move_left: second % 4 == 3,
                switch_weapon: frame == 0 && second % 10 == 5,
                respawn: !state.player.alive,
                ..Default::default()
            };
            tick(&mut state, &input, SIM_DT);
            render_frame(&state, &mut draws);
        }

        let hud = state.hud();
        log::info!(
            "t={:>2}s hp={:<4} weapon={:<6} score={:<3} ships={} asteroids={} projectiles={}",
            second + 1,
            hud.hp,
            hud.weapon,
            hud.score,
            state.player.tree_len(),
            state.asteroids.len(),
            state.projectiles.len(),
        );
    }

    log::info!(
        "demo done: {} polygons, {} circles, {} rects, {} sprites drawn; final score {}",
        draws.polygons,
        draws.circles,
        draws.rects,
        draws.sprites,
        state.player.score,
    );
}
