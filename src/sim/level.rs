//! Level director
//!
//! Builds the actor roster for a level and handles the per-level and
//! per-game resets. All randomness comes from the session RNG in a fixed
//! draw order (speed, x, y, dir per octopus), so a seed fully determines
//! every roster.

use rand::Rng;

use super::state::{Actor, GameState};
use crate::consts::*;

/// Reset everything that belongs to the game as a whole. Runs once at game
/// start; `init_level` still has to follow before the state is playable.
pub fn init_game(state: &mut GameState) {
    state.score = 0.0;
    state.level = 1;
    state.game_over = false;
    state.characters.clear();
    state.treasure.pos.x = WORLD_W / 2.0;
    state.treasure.pos.y = WORLD_H * SAND_FRAC;
    state.treasure.held = false;
    state.boat.pos.x = WORLD_W / 2.0;
    state.boat.pos.y = WORLD_H * SURFACE_FRAC;
}

/// Reset per-level state and spawn the roster for `state.level`: the diver
/// at the boat, then `2 * level + 1` octopuses. Speeds get a random bonus of
/// up to `level * 0.15`, so later levels are faster on average but still
/// varied.
pub fn init_level(state: &mut GameState) {
    state.air = START_AIR;
    state.characters.clear();
    state.treasure.held = false;
    state.characters.push(Actor::diver());

    for _ in 0..=state.level * 2 {
        let speed =
            ENEMY_BASE_SPEED + state.rng.random::<f32>() * (state.level as f32 * ENEMY_SPEED_STEP);
        let x = state.rng.random::<f32>() * WORLD_W;
        let y = state.rng.random::<f32>() * (WORLD_H * ENEMY_SPAWN_SPAN_FRAC)
            + WORLD_H * ENEMY_SPAWN_TOP_FRAC;
        let dir = if state.rng.random::<f32>() < 0.5 { 1.0 } else { -1.0 };
        state.characters.push(Actor::octopus(x, y, speed, dir));
    }
}
