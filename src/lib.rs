//! Lane Dash - a 3D endless-runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and DOM wiring live in the binary shell (`main.rs`); the
//! simulation owns gameplay truth and never touches the platform.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Lateral move speed per tick while a direction is held
    pub const MOVE_SPEED: f32 = 0.15;
    /// Lateral velocity decay per tick when no direction is held
    pub const VELOCITY_DAMPING: f32 = 0.9;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.02;
    /// Upward impulse applied on a grounded jump
    pub const JUMP_FORCE: f32 = 0.5;

    /// Player resting height (sphere center sitting on the ground)
    pub const PLAYER_START_Y: f32 = 0.5;
    /// Player sphere radius
    pub const PLAYER_RADIUS: f32 = 0.5;
    /// Player depth on the track (obstacles advance toward +z)
    pub const PLAYER_Z: f32 = 2.0;
    /// Tolerance for the grounded check
    pub const GROUND_EPSILON: f32 = 0.1;

    /// Hard lateral walls for the player
    pub const LANE_BOUND: f32 = 4.0;
    /// The three obstacle lanes
    pub const LANES: [f32; 3] = [-3.0, 0.0, 3.0];
    /// Depth at which new obstacles appear
    pub const SPAWN_Z: f32 = -20.0;
    /// Past this depth an obstacle is behind the camera and scores
    pub const DESPAWN_Z: f32 = 5.0;

    /// Cosmetic player spin per tick (radians, presentation only)
    pub const PLAYER_SPIN_RATE: f32 = 0.05;
}
