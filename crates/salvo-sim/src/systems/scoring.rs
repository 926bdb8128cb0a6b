//! Impact counting.
//!
//! Impacted lasts exactly one tick, so each ground hit is seen once.

use crate::pool::MissilePool;
use crate::score::ScoreState;

/// Add impacted enemy and plane missiles to the score.
pub fn count_impacts(pool: &MissilePool, score: &mut ScoreState) {
    let impacted = pool
        .enemy_range()
        .chain(pool.plane_range())
        .filter(|&i| pool[i].is_impacted())
        .count();
    score.impacts += impacted as u32;
}
