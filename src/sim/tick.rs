//! Fixed timestep simulation tick
//!
//! One tick advances the whole game by `dt` seconds: air, actors, pickup,
//! delivery. The host never mutates state directly - it feeds ticks and
//! drains events.

use super::collision::collides;
use super::level;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Pressed-key snapshot for a single tick. Written by the input collaborator,
/// only ever read here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by `dt` seconds.
///
/// Order matters and is load-bearing:
/// 1. air latch check, then the unconditional decrement - the tick that
///    crosses zero leaves air slightly negative until the next tick sees it
/// 2. actor updates in roster order (diver first); each octopus checks the
///    diver right after moving, the only lethality test in the game
/// 3. pickup and delivery depth thresholds; delivery re-initializes the
///    level mid-tick
///
/// There is no early return once the latch flips: the rest of the tick still
/// runs, exactly like the final frame of the original game.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let was_over = state.game_over;

    if state.air <= 0.0 {
        state.game_over = true;
    }
    state.air -= dt;

    if let Some((diver, octopuses)) = state.characters.split_first_mut() {
        diver.swim(input, dt);
        for octopus in octopuses {
            octopus.patrol(dt);
            if collides(diver, octopus) {
                state.game_over = true;
            }
        }
    }

    // Crossing the sand line scoops the chest. `held` makes this a one-shot
    // until the next level resets it.
    if let Some(diver) = state.characters.first_mut() {
        if !state.treasure.held && diver.pos.y > TREASURE_PICKUP_Y {
            state.treasure.held = true;
            diver.cargo += 1;
            state.events.push(GameEvent::TreasureGrabbed);
        }
    }

    // Surfacing at the boat banks the cargo and rolls the next level. The
    // level init replaces the roster and air in the same tick.
    let delivered = state
        .characters
        .first()
        .filter(|diver| diver.cargo > 0 && diver.pos.y < BOAT_DELIVERY_Y)
        .map(|diver| diver.cargo);
    if let Some(cargo) = delivered {
        let level_bonus = 1.0 + (state.level - 1) as f32 * LEVEL_BONUS_STEP;
        state.score += cargo as f32 * TREASURE_VALUE * level_bonus;
        state.score += state.air.ceil() * AIR_BONUS_RATE * level_bonus;
        state.level += 1;
        state.events.push(GameEvent::TreasureDelivered);
        level::init_level(state);
    }

    if !was_over && state.game_over {
        state.events.push(GameEvent::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Actor;

    /// A session with the octopuses removed, so nothing random interferes
    fn calm_state() -> GameState {
        let mut state = GameState::new(12345);
        state.characters.truncate(1);
        state
    }

    #[test]
    fn test_air_decrements_by_dt() {
        let mut state = calm_state();
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!((state.air - (START_AIR - SIM_DT)).abs() < 1e-5);
        assert!(!state.game_over);
    }

    #[test]
    fn test_air_exhaustion_has_one_tick_grace() {
        let mut state = calm_state();
        state.air = 0.5;

        // The crossing tick decrements past zero but does not latch yet
        tick(&mut state, &TickInput::default(), 1.0);
        assert!(state.air < 0.0);
        assert!(!state.game_over);

        // The next tick observes the exhausted supply
        tick(&mut state, &TickInput::default(), 1.0);
        assert!(state.game_over);
        let events: Vec<_> = state.events.drain(..).collect();
        assert_eq!(events, vec![GameEvent::GameOver]);
    }

    #[test]
    fn test_pickup_is_idempotent_while_held() {
        let mut state = calm_state();
        state.characters[0].pos.y = TREASURE_PICKUP_Y + 2.0;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.treasure.held);
        assert_eq!(state.characters[0].cargo, 1);
        let events: Vec<_> = state.events.drain(..).collect();
        assert_eq!(events, vec![GameEvent::TreasureGrabbed]);

        // Still below the pickup line, already holding: no double count
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.characters[0].cargo, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_delivery_scoring_formula() {
        let mut state = calm_state();
        state.level = 3;
        state.air = 12.4;
        state.treasure.held = true;
        state.characters[0].cargo = 1;
        state.characters[0].pos.y = BOAT_DELIVERY_Y - 0.5;

        let before = state.score;
        tick(&mut state, &TickInput::default(), SIM_DT);

        // level bonus 1.4; air is 12.4 - dt at the check, still ceiling to 13:
        // 1 * 500 * 1.4 + 13 * 10 * 1.4 = 882
        let delta = state.score - before;
        assert!((delta - 882.0).abs() < 0.01, "delta = {delta}");
    }

    #[test]
    fn test_delivery_rolls_the_next_level() {
        let mut state = calm_state();
        state.air = 20.0;
        state.treasure.held = true;
        state.characters[0].cargo = 1;
        state.characters[0].pos.y = BOAT_DELIVERY_Y - 0.5;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.level, 2);
        assert_eq!(state.air, START_AIR);
        assert!(!state.treasure.held);
        // Fresh roster: diver + 2*2+1 octopuses, cargo cleared
        assert_eq!(state.characters.len(), 7);
        assert_eq!(state.characters[0].cargo, 0);
        let events: Vec<_> = state.events.drain(..).collect();
        assert_eq!(events, vec![GameEvent::TreasureDelivered]);
    }

    #[test]
    fn test_no_delivery_without_cargo() {
        let mut state = calm_state();
        state.characters[0].pos.y = BOAT_DELIVERY_Y - 0.5;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.level, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_octopus_contact_latches_game_over() {
        let mut state = calm_state();
        state.characters[0].pos.x = 400.0;
        state.characters[0].pos.y = 300.0;
        state.characters.push(Actor::octopus(400.0, 300.0, 1.0, 1.0));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.game_over);
        let events: Vec<_> = state.events.drain(..).collect();
        assert_eq!(events, vec![GameEvent::GameOver]);

        // The latch is one-way and the edge event does not repeat
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.game_over);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_keyed_swimming_moves_the_diver() {
        let mut state = calm_state();
        state.characters[0].pos.y = 300.0;

        let input = TickInput {
            down: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        let expected = 300.0 + DIVER_SPEED * SIM_DT * SWIM_SPEED_SCALE;
        assert!((state.characters[0].pos.y - expected).abs() < 1e-3);
    }
}
