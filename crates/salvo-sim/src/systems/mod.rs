//! Per-frame systems that operate on the missile pool.
//!
//! Systems are plain functions over the pool and the engine's counters.
//! They do not own state; the engine calls them in a fixed order.

pub mod collision;
pub mod fire_control;
pub mod hud;
pub mod replenish;
pub mod scoring;
pub mod snapshot;
