//! Obstacle spawning, advancement and scoring
//!
//! Obstacles advance toward the player every tick, score when they pass
//! behind the camera, and end the run on contact. A tick timer drives new
//! spawns and the difficulty ramp.

use rand::Rng;

use crate::consts::{DESPAWN_Z, LANES, SPAWN_Z};

use super::collision::player_hits_obstacle;
use super::state::{GamePhase, GameState, Obstacle, ObstacleShape};

/// Advance all obstacles, score pass-throughs, detect collisions and run
/// the spawn timer. Call only while Running.
pub fn update(state: &mut GameState) {
    // Insertion order: the earliest spawn is resolved first. A pass-through
    // is resolved before that obstacle's collision check, so an obstacle
    // that is past the line and still touching the player scores instead of
    // killing the run.
    let mut i = 0;
    while i < state.obstacles.len() {
        state.obstacles[i].z += state.game_speed;

        if state.obstacles[i].z > DESPAWN_Z {
            let passed = state.obstacles.remove(i);
            state.score += state.tuning.pass_reward;
            log::debug!("Obstacle {} dodged, score {}", passed.id, state.score);
            continue;
        }

        if player_hits_obstacle(&state.player, &state.obstacles[i], state.tuning.collision_margin)
        {
            // First hit ends the tick: nothing else scores, spawns or is
            // removed until restart
            state.phase = GamePhase::GameOver;
            log::info!(
                "Game over on obstacle {} (score {}, distance {})",
                state.obstacles[i].id,
                state.score,
                state.distance
            );
            return;
        }

        i += 1;
    }

    state.spawn_timer += 1;
    if state.spawn_timer as f32 >= state.spawn_interval {
        spawn_obstacle(state);
        state.spawn_timer = 0;
        // Ramp difficulty, bounded on both ends
        state.spawn_interval =
            (state.spawn_interval - state.tuning.spawn_interval_step).max(state.tuning.min_spawn_interval);
        state.game_speed =
            (state.game_speed + state.tuning.speed_increment).min(state.tuning.max_game_speed);
    }
}

/// Push one obstacle with uniformly random shape and lane at the spawn depth
fn spawn_obstacle(state: &mut GameState) {
    let shape = ObstacleShape::ALL[state.rng.random_range(0..ObstacleShape::ALL.len())];
    let lane = LANES[state.rng.random_range(0..LANES.len())];

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        shape,
        x: lane,
        z: SPAWN_Z,
    });
    log::debug!("Spawned {:?} obstacle {} in lane {}", shape, id, lane);
}
