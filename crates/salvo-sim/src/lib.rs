//! Simulation engine for SALVO.
//!
//! Owns the fixed missile pool and the plane, runs the per-frame systems
//! in a fixed order, and produces `GameStateSnapshot`s for the host.

pub mod config;
pub mod engine;
pub mod missile;
pub mod plane;
pub mod platform;
pub mod pool;
pub mod score;
pub mod systems;

pub use salvo_core as core;
pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
