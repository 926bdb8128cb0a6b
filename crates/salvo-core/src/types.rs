//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// Integer display coordinate. x grows right, y grows down.
pub type Point = glam::IVec2;

/// Euclidean distance between two display points.
pub fn distance(a: Point, b: Point) -> f32 {
    (b - a).as_vec2().length()
}

/// RGB565 display color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u16);

impl Color {
    /// Pack 8-bit channels into RGB565.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
