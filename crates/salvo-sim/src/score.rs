//! Score counters kept by the engine.

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    /// Player missiles launched.
    pub shots_fired: u32,
    /// Enemy and plane missiles that reached the ground.
    pub impacts: u32,
    pub planes_destroyed: u32,
}
