//! Host-side state shared between the command sender and the game loop thread.

use salvo_core::commands::{FrameInput, PlayerCommand};
use salvo_core::types::Point;
use salvo_sim::platform::InputPanel;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to apply before the next tick.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Input panel driven by player commands.
///
/// Holds the last button mask and cursor until a later command replaces
/// them, so a press stays visible to the engine across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatchedInput {
    current: FrameInput,
}

impl LatchedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command. Returns `true` for `Reset`, which the caller must
    /// forward to the engine; the latch itself is released.
    pub fn apply(&mut self, cmd: &PlayerCommand) -> bool {
        match *cmd {
            PlayerCommand::SetButtons { buttons } => self.current.buttons = buttons,
            PlayerCommand::ReleaseAll => self.current.buttons = 0,
            PlayerCommand::MoveCursor { x, y } => self.current.cursor = Point::new(x, y),
            PlayerCommand::Reset => {
                self.current = FrameInput::default();
                return true;
            }
        }
        false
    }
}

impl InputPanel for LatchedInput {
    fn buttons(&self) -> u32 {
        self.current.buttons
    }

    fn cursor(&self) -> Point {
        self.current.cursor
    }
}
