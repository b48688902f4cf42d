//! Player kinematics
//!
//! One integration step per tick. Total over well-formed state: never fails,
//! never allocates.

use crate::consts::*;

use super::input::InputState;
use super::state::GameState;

/// Advance the player one tick from held intents, gravity and the jump latch
///
/// Order matters and is observable: lateral velocity, lateral clamp, jump,
/// gravity, vertical clamp.
pub fn update(state: &mut GameState, input: &mut InputState) {
    let player = &mut state.player;

    // Lateral motion: held direction sets velocity outright (left wins when
    // both are held), otherwise it decays so the sphere glides to a stop
    if input.left() {
        player.vel.x = -MOVE_SPEED;
    } else if input.right() {
        player.vel.x = MOVE_SPEED;
    } else {
        player.vel.x *= VELOCITY_DAMPING;
    }

    player.pos.x += player.vel.x;
    // Hard wall; velocity is deliberately left alone, so pushing into the
    // wall keeps it saturated until the key is released
    player.pos.x = player.pos.x.clamp(-LANE_BOUND, LANE_BOUND);

    // Jump only from the ground; the latch holds at most one request per press
    if player.grounded() && input.consume_jump() {
        player.vel.y = JUMP_FORCE;
        player.jumping = true;
        log::debug!("Jump at tick {}", state.time_ticks);
    }

    // Gravity applies unconditionally; at rest the ground clamp below undoes
    // the one-tick blip
    player.vel.y -= GRAVITY;
    player.pos.y += player.vel.y;

    if player.pos.y <= PLAYER_START_Y {
        player.pos.y = PLAYER_START_Y;
        player.vel.y = 0.0;
        player.jumping = false;
    }
}
