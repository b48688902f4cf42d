//! Axis-aligned collision detection
//!
//! The player sphere and every obstacle are tested as axis-aligned bounding
//! boxes. The player's box is shrunk inward by a small margin so grazing
//! passes read as dodges, not hits.

use glam::Vec3;

use crate::consts::PLAYER_RADIUS;

use super::state::{Obstacle, PlayerBody};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Shrink every face inward. May produce an empty box, which overlaps
    /// nothing.
    pub fn shrink(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec3::splat(margin),
            max: self.max - Vec3::splat(margin),
        }
    }

    /// Empty boxes (min past max on any axis) are valid and never overlap
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Overlap on all three axes
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Bounding box of the player sphere
pub fn player_aabb(player: &PlayerBody) -> Aabb {
    Aabb::from_center_half_extents(player.pos, Vec3::splat(PLAYER_RADIUS))
}

/// Forgiving hit test between the player and one obstacle
///
/// Pure; degenerate boxes (margin larger than the player) simply never hit.
pub fn player_hits_obstacle(player: &PlayerBody, obstacle: &Obstacle, margin: f32) -> bool {
    let player_box = player_aabb(player).shrink(margin);
    let obstacle_box =
        Aabb::from_center_half_extents(obstacle.center(), obstacle.shape.half_extents());
    player_box.intersects(&obstacle_box)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_START_Y;
    use crate::sim::state::ObstacleShape;
    use glam::Vec2;

    fn player_at(x: f32, y: f32, z: f32) -> PlayerBody {
        PlayerBody {
            pos: Vec3::new(x, y, z),
            vel: Vec2::ZERO,
            jumping: false,
        }
    }

    fn obstacle_at(shape: ObstacleShape, x: f32, z: f32) -> Obstacle {
        Obstacle {
            id: 1,
            shape,
            x,
            z,
        }
    }

    #[test]
    fn test_overlapping_boxes_hit() {
        let player = player_at(0.0, PLAYER_START_Y, 2.0);
        let obstacle = obstacle_at(ObstacleShape::Box, 0.0, 2.0);
        assert!(player_hits_obstacle(&player, &obstacle, 0.1));
    }

    #[test]
    fn test_adjacent_lane_misses() {
        let player = player_at(0.0, PLAYER_START_Y, 2.0);
        let obstacle = obstacle_at(ObstacleShape::Wide, 3.0, 2.0);
        assert!(!player_hits_obstacle(&player, &obstacle, 0.1));
    }

    #[test]
    fn test_jump_clears_low_obstacle() {
        // Apex of a jump is well above a 0.8-high box
        let player = player_at(0.0, 6.0, 2.0);
        let obstacle = obstacle_at(ObstacleShape::Box, 0.0, 2.0);
        assert!(!player_hits_obstacle(&player, &obstacle, 0.1));
    }

    #[test]
    fn test_margin_forgives_graze() {
        // Boxes touch within the margin band: a hit at margin 0, a miss once
        // the player box is shrunk
        let graze_x = 0.4 + PLAYER_RADIUS - 0.05;
        let player = player_at(graze_x, PLAYER_START_Y, 2.0);
        let obstacle = obstacle_at(ObstacleShape::Box, 0.0, 2.0);
        assert!(player_hits_obstacle(&player, &obstacle, 0.0));
        assert!(!player_hits_obstacle(&player, &obstacle, 0.1));
    }

    #[test]
    fn test_degenerate_player_box_never_hits() {
        let player = player_at(0.0, PLAYER_START_Y, 2.0);
        let obstacle = obstacle_at(ObstacleShape::Box, 0.0, 2.0);
        // Margin past the sphere radius empties the box
        assert!(!player_hits_obstacle(&player, &obstacle, PLAYER_RADIUS + 0.1));
    }

    #[test]
    fn test_depth_separation_misses() {
        let player = player_at(0.0, PLAYER_START_Y, 2.0);
        let obstacle = obstacle_at(ObstacleShape::Tall, 0.0, -10.0);
        assert!(!player_hits_obstacle(&player, &obstacle, 0.1));
    }
}
