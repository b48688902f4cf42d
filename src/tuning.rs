//! Data-driven game balance
//!
//! Everything that shapes the difficulty curve lives here so the shell can
//! override it without touching simulation code. Physical constants (speeds,
//! gravity, geometry) stay in `consts`.

use serde::{Deserialize, Serialize};

/// Balance knobs for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Obstacle advance per tick at the start of a run
    pub base_game_speed: f32,
    /// Ceiling for the speed ramp
    pub max_game_speed: f32,
    /// Speed gained on each spawn
    pub speed_increment: f32,

    /// Ticks between spawns at the start of a run
    pub base_spawn_interval: f32,
    /// Floor for the interval ramp
    pub min_spawn_interval: f32,
    /// Interval lost on each spawn
    pub spawn_interval_step: f32,

    /// Score awarded per dodged obstacle
    pub pass_reward: u32,
    /// Distance is score divided by this (the two reference builds disagreed
    /// on 5 vs 10; 10 is the shipped default)
    pub distance_divisor: u32,

    /// How far the player's hit box is shrunk for forgiving collisions
    pub collision_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_game_speed: 0.2,
            max_game_speed: 0.5,
            speed_increment: 0.001,

            base_spawn_interval: 60.0,
            min_spawn_interval: 30.0,
            spawn_interval_step: 0.5,

            pass_reward: 10,
            distance_divisor: 10,

            collision_margin: 0.1,
        }
    }
}

impl Tuning {
    /// Parse a tuning override blob, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring malformed tuning override: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{"distance_divisor": 5}"#);
        assert_eq!(tuning.distance_divisor, 5);
        assert_eq!(tuning.pass_reward, 10);
    }

    #[test]
    fn test_from_json_malformed_falls_back() {
        let tuning = Tuning::from_json("not json");
        assert_eq!(tuning.distance_divisor, 10);
    }
}
