//! Engine configuration and its validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use salvo_core::constants::{
    MAX_ENEMY_MISSILES, MAX_PLANE_MISSILES, MAX_PLAYER_MISSILES, MAX_POOL_SLOTS,
};

/// Configuration for starting a new simulation.
///
/// The three partition sizes are fixed for the lifetime of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Number of enemy missile slots.
    pub enemy_missiles: usize,
    /// Number of player missile slots.
    pub player_missiles: usize,
    /// Number of plane missile slots (zero or one).
    pub plane_missiles: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enemy_missiles: MAX_ENEMY_MISSILES,
            player_missiles: MAX_PLAYER_MISSILES,
            plane_missiles: MAX_PLANE_MISSILES,
        }
    }
}

/// Rejected configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missile pool of {requested} slots exceeds capacity of {capacity}")]
    PoolTooLarge { requested: usize, capacity: usize },
    #[error("the plane owns at most one missile slot, got {0}")]
    TooManyPlaneMissiles(usize),
}

impl SimConfig {
    /// Total number of pool slots across all partitions.
    pub fn total_missiles(&self) -> usize {
        self.enemy_missiles + self.player_missiles + self.plane_missiles
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plane_missiles > 1 {
            return Err(ConfigError::TooManyPlaneMissiles(self.plane_missiles));
        }
        let requested = self.total_missiles();
        if requested > MAX_POOL_SLOTS {
            return Err(ConfigError::PoolTooLarge {
                requested,
                capacity: MAX_POOL_SLOTS,
            });
        }
        Ok(())
    }
}
