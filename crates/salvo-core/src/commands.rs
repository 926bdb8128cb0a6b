//! Player commands and per-frame input sent from the host to the simulation.
//!
//! The host latches commands into a `FrameInput`, which the engine polls
//! once per tick.

use serde::{Deserialize, Serialize};

use crate::constants::BUTTON_MASK;
use crate::types::Point;

/// Instantaneous input state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Bitmask of pressed buttons.
    pub buttons: u32,
    /// Aiming cursor position.
    pub cursor: Point,
}

impl FrameInput {
    pub fn new(buttons: u32, cursor: Point) -> Self {
        Self { buttons, cursor }
    }
}

/// Whether any fire button is set in `buttons`. Bits outside `BUTTON_MASK` are ignored.
pub fn any_fire_button(buttons: u32) -> bool {
    buttons & BUTTON_MASK != 0
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace the pressed-button bitmask.
    SetButtons { buttons: u32 },
    /// Release every button.
    ReleaseAll,
    /// Move the aiming cursor.
    MoveCursor { x: i32, y: i32 },
    /// Re-run `init`: reseed the pool, rearm the plane, zero the counters.
    Reset,
}
