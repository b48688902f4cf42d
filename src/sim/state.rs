//! Game state and core simulation types
//!
//! The whole run lives in one `GameState` aggregate that every update takes
//! by reference; there are no ambient globals.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Tuning;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Scene is up but nothing simulates yet
    Idle,
    /// Active gameplay
    Running,
    /// Run ended on a collision; restart goes back to Running
    GameOver,
}

/// The player-controlled sphere
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    pub pos: Vec3,
    /// x = lateral velocity, y = vertical velocity
    pub vel: Vec2,
    pub jumping: bool,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, PLAYER_START_Y, PLAYER_Z),
            vel: Vec2::ZERO,
            jumping: false,
        }
    }
}

impl PlayerBody {
    /// At rest height with the jump flag clear
    pub fn grounded(&self) -> bool {
        !self.jumping && (self.pos.y - PLAYER_START_Y).abs() < GROUND_EPSILON
    }
}

/// Obstacle shape category; fixes the bounding extents and rest height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleShape {
    Box,
    Tall,
    Wide,
}

impl ObstacleShape {
    pub const ALL: [ObstacleShape; 3] = [ObstacleShape::Box, ObstacleShape::Tall, ObstacleShape::Wide];

    /// Half extents of the bounding box
    pub fn half_extents(&self) -> Vec3 {
        match self {
            ObstacleShape::Box => Vec3::new(0.4, 0.4, 0.4),
            ObstacleShape::Tall => Vec3::new(0.3, 0.75, 0.3),
            ObstacleShape::Wide => Vec3::new(0.75, 0.3, 0.3),
        }
    }
}

/// An obstacle advancing down the track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub shape: ObstacleShape,
    /// Lane x coordinate, fixed at spawn
    pub x: f32,
    /// Depth; grows toward the player each tick
    pub z: f32,
}

impl Obstacle {
    /// Center of the bounding box (rests on the ground)
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x, self.shape.half_extents().y, self.z)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG; advances across restarts within a session
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Derived from score each tick
    pub distance: u32,
    /// Obstacle advance per tick; ramps up within a run
    pub game_speed: f32,
    /// Ticks between spawns; ramps down within a run
    pub spawn_interval: f32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: PlayerBody,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub tuning: Tuning,
    next_id: u32,
}

impl GameState {
    /// Create a new idle session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            distance: 0,
            game_speed: tuning.base_game_speed,
            spawn_interval: tuning.base_spawn_interval,
            spawn_timer: 0,
            time_ticks: 0,
            player: PlayerBody::default(),
            obstacles: Vec::new(),
            tuning,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start (or restart) a run: full reset of counters, difficulty, player
    /// pose and the obstacle set. Ignored while already Running. Callers
    /// reset the input latches alongside.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Idle | GamePhase::GameOver => {}
            GamePhase::Running => return,
        }

        self.phase = GamePhase::Running;
        self.score = 0;
        self.distance = 0;
        self.game_speed = self.tuning.base_game_speed;
        self.spawn_interval = self.tuning.base_spawn_interval;
        self.spawn_timer = 0;
        self.player = PlayerBody::default();
        self.obstacles.clear();

        log::info!("Run started (seed {})", self.seed);
    }

    /// JSON snapshot for debug dumps
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.player.grounded());
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut state = GameState::new(1, Tuning::default());
        state.start();
        state.score = 40;
        state.start();
        assert_eq!(state.score, 40, "start must not reset a live run");
    }

    #[test]
    fn test_restart_is_full_reset() {
        let mut state = GameState::new(7, Tuning::default());
        state.start();
        state.score = 120;
        state.distance = 12;
        state.game_speed = 0.4;
        state.spawn_interval = 35.0;
        state.player.pos.x = 3.0;
        state.player.vel.y = 0.3;
        state.player.jumping = true;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            shape: ObstacleShape::Box,
            x: 0.0,
            z: -5.0,
        });
        state.phase = GamePhase::GameOver;

        state.start();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.distance, 0);
        assert_eq!(state.game_speed, state.tuning.base_game_speed);
        assert_eq!(state.spawn_interval, state.tuning.base_spawn_interval);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.pos, Vec3::new(0.0, PLAYER_START_Y, PLAYER_Z));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(!state.player.jumping);
    }

    #[test]
    fn test_shape_rest_height_matches_half_height() {
        for shape in ObstacleShape::ALL {
            let obstacle = Obstacle {
                id: 0,
                shape,
                x: 0.0,
                z: 0.0,
            };
            assert_eq!(obstacle.center().y, shape.half_extents().y);
        }
    }
}
