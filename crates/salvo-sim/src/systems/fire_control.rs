//! Player fire control: one launch per button-press edge.

use salvo_core::commands::any_fire_button;
use salvo_core::events::AudioEvent;

use crate::platform::InputPanel;
use crate::pool::MissilePool;
use crate::score::ScoreState;

/// Edge tracker for the fire buttons as a group.
///
/// Arms on the first frame any button is down and only resets once every
/// button is released, so holding or rolling between buttons fires once.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireLatch {
    pressed: bool,
}

impl FireLatch {
    /// Feed one frame of button state. True on the rising edge only.
    pub fn rising_edge(&mut self, buttons: u32) -> bool {
        let any = any_fire_button(buttons);
        let edge = any && !self.pressed;
        self.pressed = any;
        edge
    }

    pub fn reset(&mut self) {
        self.pressed = false;
    }
}

/// Poll the input once and launch a player missile on a new press.
/// Returns the slot launched, if any.
pub fn run(
    pool: &mut MissilePool,
    input: &impl InputPanel,
    latch: &mut FireLatch,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
) -> Option<usize> {
    if !latch.rising_edge(input.buttons()) {
        return None;
    }

    let target = input.cursor();
    let Some(slot) = pool.first_idle(pool.player_range()) else {
        log::trace!("no idle player missile, shot at {target} dropped");
        return None;
    };

    pool[slot].spawn_player(target);
    if audio_events.len() < audio_events.capacity() {
        audio_events.push(AudioEvent::MissileLaunch);
    } else {
        log::trace!("audio buffer full, launch sound dropped");
    }
    score.shots_fired += 1;
    Some(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use salvo_core::constants::BUTTON_MASK;

    #[test]
    fn test_latch_fires_once_while_held() {
        let mut latch = FireLatch::default();
        assert!(latch.rising_edge(0b0001));
        for _ in 0..100 {
            assert!(!latch.rising_edge(0b0001));
        }
        assert!(!latch.rising_edge(0));
        assert!(latch.rising_edge(0b0001));
    }

    #[test]
    fn test_latch_rolling_between_buttons() {
        let mut latch = FireLatch::default();
        assert!(latch.rising_edge(0b0001));
        assert!(!latch.rising_edge(0b0011));
        assert!(!latch.rising_edge(0b0010), "still held, no new edge");
        assert!(!latch.rising_edge(0));
        assert!(latch.rising_edge(0b0100));
    }

    #[test]
    fn test_latch_ignores_unmasked_bits() {
        let mut latch = FireLatch::default();
        assert!(!latch.rising_edge(!BUTTON_MASK));
    }
}
