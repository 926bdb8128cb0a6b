//! Headless drawing surface that counts primitives instead of rasterizing.

use salvo_core::types::{Color, Point};
use salvo_sim::platform::Surface;

/// Draw-call counts for one frame, or summed over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub lines: u32,
    pub circles: u32,
    pub triangles: u32,
    pub texts: u32,
}

impl FrameStats {
    fn accumulate(&mut self, other: &FrameStats) {
        self.lines += other.lines;
        self.circles += other.circles;
        self.triangles += other.triangles;
        self.texts += other.texts;
    }
}

/// Counts draw calls per frame and over the whole run.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    current: FrameStats,
    totals: FrameStats,
    frames: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame, fold it into the totals and return it.
    pub fn end_frame(&mut self) -> FrameStats {
        let frame = std::mem::take(&mut self.current);
        self.totals.accumulate(&frame);
        self.frames += 1;
        frame
    }

    pub fn totals(&self) -> FrameStats {
        self.totals
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for FrameRecorder {
    fn draw_line(&mut self, _from: Point, _to: Point, _color: Color) {
        self.current.lines += 1;
    }

    fn fill_circle(&mut self, _center: Point, _radius: f32, _color: Color) {
        self.current.circles += 1;
    }

    fn fill_triangle(&mut self, _a: Point, _b: Point, _c: Point, _color: Color) {
        self.current.triangles += 1;
    }

    fn draw_text(&mut self, _at: Point, _text: &str, _color: Color) {
        self.current.texts += 1;
    }
}
