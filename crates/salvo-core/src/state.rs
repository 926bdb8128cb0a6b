//! Game state snapshot: the complete visible state handed to the host.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Point, SimTime};

/// Complete simulation state, built on demand after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    /// One entry per pool slot, in index order.
    pub missiles: Vec<MissileView>,
    pub plane: PlaneView,
    pub score: ScoreView,
}

/// One missile slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub slot: usize,
    pub kind: MissileKind,
    pub state: MissileState,
    pub origin: Point,
    pub destination: Point,
    pub position: Point,
    /// Current blast radius (zero unless exploding).
    pub blast_radius: f32,
}

/// Plane status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaneView {
    pub state: PlaneState,
    pub position: Point,
    pub shots_remaining: u8,
}

/// Running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub impacts: u32,
    pub planes_destroyed: u32,
}
