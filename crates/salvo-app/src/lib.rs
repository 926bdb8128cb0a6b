//! SALVO host.
//!
//! Runs the simulation engine on its own fixed-rate thread, feeds it
//! player commands over a channel and publishes snapshots for polling.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod recorder;
pub mod script;
pub mod state;

pub use salvo_core as core;
pub use error::HostError;
