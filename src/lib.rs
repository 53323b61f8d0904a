//! Treasure Diver - an undersea arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, levels, scoring)
//! - `renderer`: Canvas2D sprite and HUD rendering (wasm)
//! - `audio`: Procedural Web Audio sound effects (wasm)
//! - `settings`: Player preferences persisted to LocalStorage
//! - `highscores`: Top-10 leaderboard

pub mod highscores;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (30 Hz, the original arcade cadence)
    pub const SIM_DT: f32 = 1.0 / 30.0;

    /// World dimensions in pixels (also the canvas size)
    pub const WORLD_W: f32 = 800.0;
    pub const WORLD_H: f32 = 600.0;

    /// Fraction of world height where the water surface sits
    pub const SURFACE_FRAC: f32 = 0.2;
    /// Fraction of world height where the sand begins
    pub const SAND_FRAC: f32 = 0.9;
    /// Tile size of the sprite atlas
    pub const SPRITE_SIZE: f32 = 32.0;

    /// Vertical band actors may occupy (both bounds exclusive)
    pub const SWIM_BAND_TOP: f32 = WORLD_H * SURFACE_FRAC;
    pub const SWIM_BAND_BOTTOM: f32 = WORLD_H * SAND_FRAC - SPRITE_SIZE / 2.0;

    /// Horizontal patrol speed scale for octopuses (px/s per unit speed)
    pub const PATROL_SPEED_SCALE: f32 = 100.0;
    /// Vertical swim speed scale for the diver (px/s per unit speed)
    pub const SWIM_SPEED_SCALE: f32 = 125.0;
    /// Downward drag per carried chest (px/s per unit speed)
    pub const CARGO_DRAG_SCALE: f32 = 25.0;

    /// Depth the diver must pass to scoop the treasure off the sand
    pub const TREASURE_PICKUP_Y: f32 = 518.0;
    /// Depth above which cargo is banked at the boat
    pub const BOAT_DELIVERY_Y: f32 = 121.0;

    /// Air supply per level, in seconds
    pub const START_AIR: f32 = 50.0;
    /// HUD shows the air readout in the alert color below this
    pub const LOW_AIR: f32 = 10.0;

    /// Base score for banking one treasure chest
    pub const TREASURE_VALUE: f32 = 500.0;
    /// Score per remaining (ceiled) unit of air at delivery
    pub const AIR_BONUS_RATE: f32 = 10.0;
    /// Extra score multiplier gained per completed level
    pub const LEVEL_BONUS_STEP: f32 = 0.2;

    /// Diver swim speed in speed units
    pub const DIVER_SPEED: f32 = 1.0;
    /// Octopus base speed; each level adds up to `level * ENEMY_SPEED_STEP`
    pub const ENEMY_BASE_SPEED: f32 = 1.0;
    pub const ENEMY_SPEED_STEP: f32 = 0.15;
    /// Octopus spawn band as fractions of world height
    pub const ENEMY_SPAWN_TOP_FRAC: f32 = 0.25;
    pub const ENEMY_SPAWN_SPAN_FRAC: f32 = 0.56;
}

/// Wrap an x coordinate onto the cylindrical world, to [0, W)
#[inline]
pub fn wrap_x(x: f32) -> f32 {
    x.rem_euclid(consts::WORLD_W)
}
