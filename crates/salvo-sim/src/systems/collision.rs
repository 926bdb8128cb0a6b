//! Explosion collision checks.
//!
//! Only the exploding side has a radius; the other side is a point.
//! Moving missiles are flagged, not detonated: the flag is consumed on
//! their own next tick, so nothing in the pool changes state mid-scan.

use rand::Rng;

use crate::plane::Plane;
use crate::pool::MissilePool;

/// Flag every moving enemy or plane missile caught in a blast.
/// Player missiles are never chain-detonated. Returns the number flagged.
pub fn flag_chain_detonations(pool: &mut MissilePool) -> usize {
    let mut flagged = 0;
    for i in pool.enemy_range().chain(pool.plane_range()) {
        if !pool[i].is_moving() {
            continue;
        }
        if pool.any_blast_covers(pool[i].position()) {
            pool[i].request_explosion();
            flagged += 1;
        }
    }
    flagged
}

/// Shoot down a flying plane caught in any blast. At most one kill per call.
pub fn check_plane(pool: &MissilePool, plane: &mut Plane, rng: &mut impl Rng) -> bool {
    if !plane.is_flying() {
        return false;
    }
    if pool.any_blast_covers(plane.position()) {
        plane.explode(rng);
        return true;
    }
    false
}
