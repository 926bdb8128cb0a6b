//! Enemy replenishment: every idle enemy slot is relaunched the same frame.

use rand::Rng;

use crate::pool::MissilePool;

/// Respawn idle enemy slots. Returns how many were relaunched.
pub fn run(pool: &mut MissilePool, rng: &mut impl Rng) -> usize {
    let mut relaunched = 0;
    for i in pool.enemy_range() {
        if pool[i].is_idle() {
            pool[i].spawn_enemy(rng);
            relaunched += 1;
        }
    }
    relaunched
}
