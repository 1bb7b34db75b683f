//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Elapsed time supplied by the caller, integrated as given
//! - Seeded RNG only, owned by the state and threaded explicitly
//! - Stable iteration order (creation order for collections, preorder for the
//!   ship tree)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod kinematics;
pub mod projectile;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidShape, ShapeSelector, SizeTier};
pub use collision::{circles_overlap, resolve_projectile_hits, resolve_ship_hits};
pub use kinematics::{Kinematics, Motion};
pub use projectile::{Projectile, WeaponKind};
pub use ship::{Ship, WeaponStats};
pub use state::{GameState, HudSnapshot};
pub use tick::{TickInput, tick};
