//! Collaborator interfaces the engine drives each frame.
//!
//! The host supplies an input panel (polled once per tick) and a drawing
//! surface. Both are side-effect only from the engine's point of view.

use salvo_core::commands::FrameInput;
use salvo_core::types::{Color, Point};

/// Button and aiming-cursor state.
pub trait InputPanel {
    /// Bitmask of currently pressed buttons.
    fn buttons(&self) -> u32;
    /// Current aiming position.
    fn cursor(&self) -> Point;
}

impl InputPanel for FrameInput {
    fn buttons(&self) -> u32 {
        self.buttons
    }

    fn cursor(&self) -> Point {
        self.cursor
    }
}

/// Drawing primitives.
pub trait Surface {
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color);
    fn draw_text(&mut self, at: Point, text: &str, color: Color);
}

/// Surface that discards everything. For headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn draw_line(&mut self, _from: Point, _to: Point, _color: Color) {}
    fn fill_circle(&mut self, _center: Point, _radius: f32, _color: Color) {}
    fn fill_triangle(&mut self, _a: Point, _b: Point, _c: Point, _color: Color) {}
    fn draw_text(&mut self, _at: Point, _text: &str, _color: Color) {}
}
