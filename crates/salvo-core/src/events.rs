//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

/// Fire-and-forget audio requests for the host sound player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Set the output volume (percent).
    SetVolume { percent: u8 },
    /// Play the missile launch clip once.
    MissileLaunch,
}
