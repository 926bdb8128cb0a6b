//! Fixed-capacity missile pool.
//!
//! Slots are laid out as `[enemy.. | player.. | plane]`. The partition
//! boundaries are set once at construction; storage never grows.

use std::ops::{Index, IndexMut, Range};

use salvo_core::types::Point;

use crate::config::SimConfig;
use crate::missile::Missile;

#[derive(Debug, Clone)]
pub struct MissilePool {
    slots: Vec<Missile>,
    enemy: Range<usize>,
    player: Range<usize>,
    plane: Range<usize>,
}

impl MissilePool {
    /// Allocate all slots, idle. The config must already be validated.
    pub fn new(config: &SimConfig) -> Self {
        let enemy = 0..config.enemy_missiles;
        let player = enemy.end..enemy.end + config.player_missiles;
        let plane = player.end..player.end + config.plane_missiles;
        Self {
            slots: vec![Missile::default(); plane.end],
            enemy,
            player,
            plane,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn enemy_range(&self) -> Range<usize> {
        self.enemy.clone()
    }

    pub fn player_range(&self) -> Range<usize> {
        self.player.clone()
    }

    pub fn plane_range(&self) -> Range<usize> {
        self.plane.clone()
    }

    /// The plane's owned slot, if the plane partition is non-empty.
    pub fn plane_slot(&self) -> Option<usize> {
        (!self.plane.is_empty()).then_some(self.plane.start)
    }

    /// Lowest-index idle slot in `range`.
    pub fn first_idle(&self, range: Range<usize>) -> Option<usize> {
        range.into_iter().find(|&i| self.slots[i].is_idle())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Missile> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Missile> {
        self.slots.iter_mut()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Missile> {
        self.slots.get_mut(index)
    }

    /// Whether any exploding slot covers `point`.
    pub fn any_blast_covers(&self, point: Point) -> bool {
        self.slots.iter().any(|m| m.is_colliding(point))
    }
}

impl Index<usize> for MissilePool {
    type Output = Missile;

    fn index(&self, index: usize) -> &Missile {
        &self.slots[index]
    }
}

impl IndexMut<usize> for MissilePool {
    fn index_mut(&mut self, index: usize) -> &mut Missile {
        &mut self.slots[index]
    }
}
