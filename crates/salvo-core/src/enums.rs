//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Color;

/// Missile kind. Fixed at spawn; selects speed and color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileKind {
    /// Launched by the player toward the aiming cursor.
    Player,
    /// Falls from the top band toward the ground.
    #[default]
    Enemy,
    /// Dropped by the plane during a sortie.
    Plane,
}

impl MissileKind {
    /// Distance covered per tick while moving.
    pub fn speed(self) -> f32 {
        match self {
            MissileKind::Player => PLAYER_MISSILE_DISTANCE_PER_TICK,
            MissileKind::Enemy => ENEMY_MISSILE_DISTANCE_PER_TICK,
            MissileKind::Plane => PLANE_MISSILE_DISTANCE_PER_TICK,
        }
    }

    /// Trail and blast color.
    pub fn color(self) -> Color {
        match self {
            MissileKind::Player => COLOR_PLAYER_MISSILE,
            MissileKind::Enemy => COLOR_ENEMY_MISSILE,
            MissileKind::Plane => COLOR_PLANE_MISSILE,
        }
    }
}

/// Missile lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissileState {
    /// Freshly spawned, becomes Moving on the next tick.
    Initializing,
    /// Travelling along its trajectory.
    Moving,
    /// Blast radius growing.
    ExplodingGrowing,
    /// Blast radius shrinking.
    ExplodingShrinking,
    /// Reached the ground. Lasts exactly one tick.
    Impacted,
    /// Slot free for reuse.
    #[default]
    Idle,
}

/// Plane lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneState {
    /// Off-screen, counting down to the next sortie.
    #[default]
    Idle,
    /// Flying right to left across the display.
    Moving,
}
