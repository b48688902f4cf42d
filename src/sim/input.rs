//! Intent-level input state
//!
//! Decouples the simulation from raw key events: the shell reports edge
//! transitions for the three recognized actions, the simulation reads
//! intents. Left/right are level-triggered; jump is a latch armed once per
//! physical press and re-armed only by a release.

use serde::{Deserialize, Serialize};

/// The three recognized player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

/// Pressed/released intents, mutated only by the event source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    left: bool,
    right: bool,
    jump_held: bool,
    jump_queued: bool,
}

impl InputState {
    /// Record a raw edge transition for an action
    pub fn set_intent(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveLeft => self.left = pressed,
            Action::MoveRight => self.right = pressed,
            Action::Jump => {
                if pressed {
                    // Key auto-repeat keeps reporting presses; only a fresh
                    // press arms the latch
                    if !self.jump_held {
                        self.jump_held = true;
                        self.jump_queued = true;
                    }
                } else {
                    self.jump_held = false;
                    self.jump_queued = false;
                }
            }
        }
    }

    pub fn left(&self) -> bool {
        self.left
    }

    pub fn right(&self) -> bool {
        self.right
    }

    /// Take the pending jump request, at most once per press
    pub fn consume_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_queued)
    }

    /// Drop all held intents and latches (on run start/restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
