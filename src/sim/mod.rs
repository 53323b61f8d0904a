//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable update order (diver first, then octopuses in spawn order)
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod geom;
pub mod level;
pub mod state;
pub mod stepper;
pub mod tick;

pub use collision::{collides, hit_box};
pub use geom::{Rect, intersects};
pub use level::{init_game, init_level};
pub use state::{Actor, ActorKind, GameEvent, GameState, Item};
pub use stepper::Stepper;
pub use tick::{TickInput, tick};
