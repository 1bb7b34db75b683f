//! Draw pass over the simulation state
//!
//! The core never talks to a graphics API directly; it issues primitive draw
//! calls through [`DrawTarget`], implemented by the windowing collaborator.

use glam::Vec2;

use crate::TextureId;
use crate::consts::*;
use crate::sim::{GameState, Ship, WeaponKind};

/// Primitive draw calls consumed from the rendering collaborator
pub trait DrawTarget {
    fn draw_polygon_outline(&mut self, center: Vec2, sides: u32, radius: f32, rotation_deg: f32);
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32);
    /// Axis-aligned rect given its top-left corner and size
    fn draw_filled_rect(&mut self, min: Vec2, size: Vec2);
    /// Sprite centered on `center`, rotated about it
    fn draw_sprite(&mut self, texture: TextureId, center: Vec2, size: Vec2, rotation_deg: f32);
}

/// Render one frame: projectiles, then asteroids, then the ship tree
pub fn render_frame(state: &GameState, target: &mut impl DrawTarget) {
    for projectile in &state.projectiles {
        let pos = projectile.position();
        match projectile.kind {
            WeaponKind::Bullet => target.draw_filled_circle(pos, BULLET_RADIUS),
            WeaponKind::Laser => target.draw_filled_rect(
                Vec2::new(pos.x - 2.0, pos.y - LASER_LENGTH),
                Vec2::new(4.0, LASER_LENGTH),
            ),
        }
    }

    for asteroid in &state.asteroids {
        target.draw_polygon_outline(
            asteroid.position(),
            asteroid.shape.sides(),
            asteroid.radius(),
            asteroid.kinematics.rotation,
        );
    }

    draw_ship_tree(&state.player, state.time, target);
}

fn draw_ship_tree(ship: &Ship, time: f32, target: &mut impl DrawTarget) {
    // A dead ship blinks: drawn only during the first half of each cycle
    let visible = ship.alive || time % DEATH_BLINK_PERIOD <= DEATH_BLINK_PERIOD / 2.0;
    if visible {
        target.draw_sprite(
            ship.texture,
            ship.position(),
            Vec2::splat(ship.radius * 2.0),
            ship.kinematics.rotation,
        );
    }
    for orb in &ship.orbiters {
        draw_ship_tree(orb, time, target);
    }
}
