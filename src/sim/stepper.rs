//! Fixed timestep frame drain
//!
//! The accumulator pattern from "Fix Your Timestep", as the original game
//! ran it: every frame's wall-clock delta is consumed in full, in substeps
//! of at most `SIM_DT`, with a partial final substep instead of a carry.
//! There is deliberately no substep cap - a long stall becomes a burst of
//! substeps (a fast-forward), not a dropped frame.

use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::SIM_DT;

/// Drives the simulation from any scheduler: a display-sync callback, a
/// timer, or a test feeding synthetic deltas.
#[derive(Debug, Default)]
pub struct Stepper {
    /// Total simulated time, in seconds
    pub run_time: f32,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain one frame's wall-clock delta (seconds) into simulation ticks.
    /// Returns the number of substeps run. Once the game is over, later
    /// frames run nothing - the latch is terminal.
    ///
    /// The caller renders once per call, however many substeps ran.
    pub fn advance(&mut self, state: &mut GameState, input: &TickInput, frame_time: f32) -> u32 {
        if state.game_over {
            return 0;
        }
        let mut remaining = frame_time;
        let mut substeps = 0;
        while remaining > 0.0 {
            let step = remaining.min(SIM_DT);
            tick(state, input, step);
            remaining -= step;
            self.run_time += step;
            substeps += 1;
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::START_AIR;

    fn calm_state() -> GameState {
        let mut state = GameState::new(9);
        state.characters.truncate(1);
        state
    }

    #[test]
    fn test_frame_splits_into_fixed_substeps() {
        let mut stepper = Stepper::new();
        let mut state = calm_state();

        // 50 ms = one full substep plus a partial one
        let steps = stepper.advance(&mut state, &TickInput::default(), 0.05);
        assert_eq!(steps, 2);
        assert!((stepper.run_time - 0.05).abs() < 1e-5);
        // The whole delta was simulated, not just the full substeps
        assert!((state.air - (START_AIR - 0.05)).abs() < 1e-4);
    }

    #[test]
    fn test_zero_delta_runs_nothing() {
        let mut stepper = Stepper::new();
        let mut state = calm_state();
        assert_eq!(stepper.advance(&mut state, &TickInput::default(), 0.0), 0);
        assert_eq!(state.air, START_AIR);
    }

    #[test]
    fn test_stall_fast_forwards_in_one_call() {
        let mut stepper = Stepper::new();
        let mut state = calm_state();

        // A one-second stall bursts through ~30 substeps in a single frame
        let steps = stepper.advance(&mut state, &TickInput::default(), 1.0);
        assert!((30..=31).contains(&steps), "steps = {steps}");
        assert!((state.air - (START_AIR - 1.0)).abs() < 1e-3);
    }

    #[test]
    fn test_game_over_freezes_later_frames() {
        let mut stepper = Stepper::new();
        let mut state = calm_state();
        state.air = -0.1;

        // This frame latches the game over mid-drain and still finishes
        stepper.advance(&mut state, &TickInput::default(), 0.1);
        assert!(state.game_over);
        let frozen_air = state.air;
        let frozen_score = state.score;

        // Later frames run zero substeps and mutate nothing
        for _ in 0..5 {
            assert_eq!(stepper.advance(&mut state, &TickInput::default(), 0.1), 0);
        }
        assert_eq!(state.air, frozen_air);
        assert_eq!(state.score, frozen_score);
    }

    #[test]
    fn test_fixed_deltas_are_deterministic() {
        let deltas = [0.016, 0.033, 0.2, 0.008, 0.016];
        let input = TickInput {
            down: true,
            ..Default::default()
        };

        let run = || {
            let mut stepper = Stepper::new();
            let mut state = GameState::new(777);
            let mut step_counts = Vec::new();
            for &dt in &deltas {
                step_counts.push(stepper.advance(&mut state, &input, dt));
            }
            (step_counts, state)
        };

        let (steps_a, state_a) = run();
        let (steps_b, state_b) = run();
        assert_eq!(steps_a, steps_b);
        assert_eq!(state_a.air, state_b.air);
        assert_eq!(state_a.score, state_b.score);
        assert_eq!(state_a.characters.len(), state_b.characters.len());
        for (a, b) in state_a.characters.iter().zip(&state_b.characters) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
