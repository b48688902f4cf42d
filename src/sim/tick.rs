//! Per-frame simulation tick
//!
//! The shell calls this once per rendering frame. Outside the Running phase
//! it is a no-op, which is what freezes the world on game over and before
//! the first start.

use super::input::InputState;
use super::state::{GamePhase, GameState};
use super::{player, spawn};

/// Advance the simulation by one frame
///
/// Fixed order: player kinematics, then obstacle advancement (which runs
/// collision detection and may end the run), then the derived distance
/// counter. The shell mirrors visuals and HUD from the state afterwards.
pub fn tick(state: &mut GameState, input: &mut InputState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    player::update(state, input);
    spawn::update(state);

    state.distance = state.score / state.tuning.distance_divisor;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::consts::*;
    use crate::sim::state::{Obstacle, ObstacleShape};

    fn running_state() -> GameState {
        let mut state = GameState::new(9, Tuning::default());
        state.start();
        state
    }

    #[test]
    fn test_idle_state_does_not_simulate() {
        let mut state = GameState::new(9, Tuning::default());
        let mut input = InputState::default();

        tick(&mut state, &mut input);
        assert_eq!(state.time_ticks, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_sixty_idle_ticks_spawn_exactly_one_obstacle() {
        let mut state = running_state();
        let mut input = InputState::default();

        for _ in 0..60 {
            tick(&mut state, &mut input);
        }
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.distance, 0);
        // No input: the player has not moved
        assert_eq!(state.player.pos.x, 0.0);
        assert_eq!(state.player.pos.y, PLAYER_START_Y);
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = running_state();
        let mut input = InputState::default();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            shape: ObstacleShape::Box,
            x: 0.0,
            z: state.player.pos.z - 0.1,
        });

        tick(&mut state, &mut input);
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen = state.clone();
        for _ in 0..10 {
            tick(&mut state, &mut input);
        }
        assert_eq!(state.time_ticks, frozen.time_ticks);
        assert_eq!(state.obstacles.len(), frozen.obstacles.len());
        assert_eq!(state.player.pos, frozen.player.pos);
    }

    #[test]
    fn test_distance_derives_from_score() {
        let mut state = running_state();
        state.spawn_interval = f32::MAX;
        let mut input = InputState::default();
        // Three obstacles already past the line score on the next tick
        for lane in LANES {
            let id = state.next_entity_id();
            state.obstacles.push(Obstacle {
                id,
                shape: ObstacleShape::Box,
                x: lane,
                z: DESPAWN_Z + 1.0,
            });
        }

        tick(&mut state, &mut input);
        assert_eq!(state.score, 30);
        assert_eq!(state.distance, 3);
    }

    #[test]
    fn test_distance_divisor_is_tunable() {
        let tuning = Tuning {
            distance_divisor: 5,
            ..Tuning::default()
        };
        let mut state = GameState::new(9, tuning);
        state.start();
        state.spawn_interval = f32::MAX;
        let mut input = InputState::default();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            shape: ObstacleShape::Wide,
            x: 3.0,
            z: DESPAWN_Z + 1.0,
        });

        tick(&mut state, &mut input);
        assert_eq!(state.score, 10);
        assert_eq!(state.distance, 2);
    }

    #[test]
    fn test_restart_after_collision_resets_run() {
        let mut state = running_state();
        let mut input = InputState::default();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            shape: ObstacleShape::Box,
            x: 0.0,
            z: state.player.pos.z - 0.1,
        });
        tick(&mut state, &mut input);
        assert_eq!(state.phase, GamePhase::GameOver);

        state.start();
        input.reset();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());

        // And the fresh run simulates normally again
        tick(&mut state, &mut input);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_determinism_same_seed_same_run() {
        let mut a = GameState::new(777, Tuning::default());
        let mut b = GameState::new(777, Tuning::default());
        a.start();
        b.start();
        let mut input_a = InputState::default();
        let mut input_b = InputState::default();

        for _ in 0..500 {
            tick(&mut a, &mut input_a);
            tick(&mut b, &mut input_b);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.shape, ob.shape);
            assert_eq!(oa.x, ob.x);
            assert_eq!(oa.z, ob.z);
        }
    }
}
