//! Core types and definitions for the SALVO simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! constants, entity states, geometry, colors, snapshots, audio events
//! and host commands. It has no dependency on any runtime or display.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
