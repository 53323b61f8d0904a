//! Game state and core simulation types
//!
//! One `GameState` is one game. The roster, treasure flag, and air are
//! rebuilt every level; score, level, and the boat persist across levels.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geom::Rect;
use super::level;
use super::tick::TickInput;
use crate::consts::*;
use crate::wrap_x;

/// Sprite-source rects into the atlas image
pub mod sprites {
    use crate::sim::geom::Rect;

    pub const DIVER: Rect = Rect::new(0.0, 0.0, 31.0, 31.0);
    pub const OCTOPUS: Rect = Rect::new(0.0, 32.0, 32.0, 32.0);
    pub const BOAT: Rect = Rect::new(0.0, 64.0, 32.0, 32.0);
    pub const TREASURE: Rect = Rect::new(0.0, 97.0, 32.0, 31.0);
}

/// Actor-local collision boxes, offsets from the sprite's top-left after the
/// sprite has been horizontally centered on `pos.x`
pub mod hitboxes {
    use crate::sim::geom::Rect;

    pub const DIVER: Rect = Rect::new(2.0, 6.0, 26.0, 6.0);
    pub const OCTOPUS: Rect = Rect::new(6.0, 2.0, 16.0, 20.0);
}

/// Actor kinds, each with its own update behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    /// The player
    Diver,
    /// Patrols horizontally; touching the diver ends the game
    Octopus,
}

/// A movable actor (the diver or an octopus)
#[derive(Debug, Clone)]
pub struct Actor {
    pub kind: ActorKind,
    /// World position. The sprite is drawn centered on `pos.x` with its top
    /// edge at `pos.y`.
    pub pos: Vec2,
    /// Speed in tuning units; movement scales are in `consts`
    pub move_speed: f32,
    pub sprite: Rect,
    pub collision_box: Rect,
    /// Facing, +1 or -1. Flips octopus patrol heading and sprite mirroring.
    pub dir: f32,
    /// Treasure chests currently carried (only the diver ever holds any)
    pub cargo: u32,
}

impl Actor {
    /// The player actor, surfaced at the boat
    pub fn diver() -> Self {
        Self {
            kind: ActorKind::Diver,
            pos: Vec2::new(WORLD_W / 2.0, SWIM_BAND_TOP),
            move_speed: DIVER_SPEED,
            sprite: sprites::DIVER,
            collision_box: hitboxes::DIVER,
            dir: 1.0,
            cargo: 0,
        }
    }

    pub fn octopus(x: f32, y: f32, move_speed: f32, dir: f32) -> Self {
        Self {
            kind: ActorKind::Octopus,
            pos: Vec2::new(x, y),
            move_speed,
            sprite: sprites::OCTOPUS,
            collision_box: hitboxes::OCTOPUS,
            dir,
            cargo: 0,
        }
    }

    /// Move by a delta. Horizontal motion wraps onto the cylindrical world;
    /// vertical motion commits only when the target stays strictly inside the
    /// swim band - otherwise the whole vertical step is rejected, which is
    /// the soft wall at the surface and the sand.
    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.pos.x = wrap_x(self.pos.x + dx);
        let target_y = self.pos.y + dy;
        if target_y > SWIM_BAND_TOP && target_y < SWIM_BAND_BOTTOM {
            self.pos.y = target_y;
        }
    }

    /// Diver behavior: keyed vertical swimming, facing from left/right, then
    /// the cargo drag. The drag is a separate step so it gets band-clamped
    /// independently of the key motion.
    pub fn swim(&mut self, input: &TickInput, dt: f32) {
        if input.up {
            self.shift(0.0, -self.move_speed * dt * SWIM_SPEED_SCALE);
        }
        if input.down {
            self.shift(0.0, self.move_speed * dt * SWIM_SPEED_SCALE);
        }
        if input.right {
            self.dir = 1.0;
        }
        if input.left {
            self.dir = -1.0;
        }
        if self.cargo > 0 {
            self.shift(0.0, self.move_speed * dt * CARGO_DRAG_SCALE * self.cargo as f32);
        }
    }

    /// Octopus behavior: horizontal patrol, never vertical
    pub fn patrol(&mut self, dt: f32) {
        self.shift(self.move_speed * self.dir * dt * PATROL_SPEED_SCALE, 0.0);
    }
}

/// A static or held item (the treasure chest or the boat)
#[derive(Debug, Clone)]
pub struct Item {
    pub pos: Vec2,
    /// Treasure only: picked up and rendered attached to the diver
    pub held: bool,
    pub sprite: Rect,
}

impl Item {
    pub fn new(x: f32, y: f32, sprite: Rect) -> Self {
        Self {
            pos: Vec2::new(x, y),
            held: false,
            sprite,
        }
    }
}

/// Gameplay edges surfaced to the host, each emitted exactly once per
/// qualifying transition. The host drains these for one-shot side effects
/// (sound), keeping the simulation free of I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The diver scooped the treasure off the sand
    TreasureGrabbed,
    /// Cargo banked at the boat; the next level has already been initialized
    TreasureDelivered,
    /// The terminal latch flipped (air ran out or an octopus got the diver)
    GameOver,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducible spawns
    pub seed: u64,
    /// Diver first, then octopuses in spawn order. Update order is roster
    /// order.
    pub characters: Vec<Actor>,
    pub treasure: Item,
    pub boat: Item,
    pub score: f32,
    /// 1-based; bumps on every delivery
    pub level: u32,
    /// Remaining air in seconds. May dip just below zero for one tick before
    /// the latch is observed.
    pub air: f32,
    /// One-way latch, terminal
    pub game_over: bool,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh session: game init plus the first level
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            characters: Vec::new(),
            treasure: Item::new(WORLD_W / 2.0, WORLD_H * SAND_FRAC, sprites::TREASURE),
            boat: Item::new(WORLD_W / 2.0, WORLD_H * SURFACE_FRAC, sprites::BOAT),
            score: 0.0,
            level: 1,
            air: START_AIR,
            game_over: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        level::init_game(&mut state);
        level::init_level(&mut state);
        state
    }

    /// The player actor. Present from level init onward.
    pub fn diver(&self) -> Option<&Actor> {
        self.characters.first()
    }
}
