//! Snapshot builder: reads the pool and plane, produces a `GameStateSnapshot`.

use salvo_core::state::{GameStateSnapshot, MissileView, PlaneView, ScoreView};
use salvo_core::types::SimTime;

use crate::plane::Plane;
use crate::pool::MissilePool;
use crate::score::ScoreState;

/// Build a complete snapshot. Allocates; the host calls it outside `tick`.
pub fn build_snapshot(
    pool: &MissilePool,
    plane: &Plane,
    score: &ScoreState,
    time: &SimTime,
) -> GameStateSnapshot {
    let missiles = pool
        .iter()
        .enumerate()
        .map(|(slot, m)| MissileView {
            slot,
            kind: m.kind(),
            state: m.state(),
            origin: m.origin(),
            destination: m.destination(),
            position: m.position(),
            blast_radius: if m.is_exploding() { m.blast_radius() } else { 0.0 },
        })
        .collect();

    GameStateSnapshot {
        time: *time,
        missiles,
        plane: PlaneView {
            state: plane.state(),
            position: plane.position(),
            shots_remaining: plane.shots_remaining(),
        },
        score: ScoreView {
            shots_fired: score.shots_fired,
            impacts: score.impacts,
            planes_destroyed: score.planes_destroyed,
        },
    }
}
