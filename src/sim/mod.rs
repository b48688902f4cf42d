//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame timestep only
//! - Seeded RNG only
//! - Insertion-order iteration over obstacles
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, player_hits_obstacle};
pub use input::{Action, InputState};
pub use state::{GamePhase, GameState, Obstacle, ObstacleShape, PlayerBody};
pub use tick::tick;
