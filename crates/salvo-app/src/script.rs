//! Scripted demo input: periodic fire presses sweeping the cursor across
//! the upper part of the screen.

use salvo_core::commands::PlayerCommand;

/// Frames between fire presses.
pub const FIRE_INTERVAL: u64 = 15;

const TARGETS: [(i32, i32); 6] = [
    (40, 60),
    (100, 90),
    (160, 50),
    (220, 100),
    (280, 70),
    (160, 130),
];

/// Commands to apply before `frame` is ticked. Press on the first frame of
/// each interval, release on the next.
pub fn commands_for_frame(frame: u64) -> Vec<PlayerCommand> {
    match frame % FIRE_INTERVAL {
        0 => {
            let (x, y) = TARGETS[(frame / FIRE_INTERVAL) as usize % TARGETS.len()];
            vec![
                PlayerCommand::MoveCursor { x, y },
                PlayerCommand::SetButtons { buttons: 1 },
            ]
        }
        1 => vec![PlayerCommand::ReleaseAll],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_cycle() {
        let presses = (0..FIRE_INTERVAL * 4)
            .flat_map(commands_for_frame)
            .filter(|c| matches!(c, PlayerCommand::SetButtons { .. }))
            .count();
        let releases = (0..FIRE_INTERVAL * 4)
            .flat_map(commands_for_frame)
            .filter(|c| matches!(c, PlayerCommand::ReleaseAll))
            .count();
        assert_eq!(presses, 4);
        assert_eq!(releases, 4);
        assert!(commands_for_frame(2).is_empty());
    }

    #[test]
    fn test_cursor_sweeps_targets() {
        let first = commands_for_frame(0);
        let second = commands_for_frame(FIRE_INTERVAL);
        assert!(matches!(first[0], PlayerCommand::MoveCursor { x: 40, y: 60 }));
        assert!(matches!(second[0], PlayerCommand::MoveCursor { x: 100, y: 90 }));
    }
}
