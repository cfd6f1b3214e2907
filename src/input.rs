//! Maps raw key names and swipe vectors onto game commands.

use crate::constants::{KEYS_DOWN, KEYS_LEFT, KEYS_PAUSE, KEYS_RIGHT, KEYS_UP};
use crate::model::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    TogglePause,
}

/// `KeyboardEvent.key` to command. Unknown keys map to nothing.
pub fn command_for_key(key: &str) -> Option<InputCommand> {
    if KEYS_PAUSE.contains(&key) {
        return Some(InputCommand::TogglePause);
    }
    let dir = if KEYS_UP.contains(&key) {
        Direction::Up
    } else if KEYS_DOWN.contains(&key) {
        Direction::Down
    } else if KEYS_LEFT.contains(&key) {
        Direction::Left
    } else if KEYS_RIGHT.contains(&key) {
        Direction::Right
    } else {
        return None;
    };
    Some(InputCommand::Turn(dir))
}

/// Direction of a swipe from its start-to-end vector (screen coordinates).
///
/// The larger component wins; a tie counts as vertical. Only movement strictly
/// beyond `min_distance` on the winning axis registers.
pub fn swipe_direction(dx: f64, dy: f64, min_distance: f64) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx.abs() <= min_distance {
            return None;
        }
        Some(if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        if dy.abs() <= min_distance {
            return None;
        }
        Some(if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd() {
        assert_eq!(command_for_key("ArrowUp"), Some(InputCommand::Turn(Direction::Up)));
        assert_eq!(command_for_key("W"), Some(InputCommand::Turn(Direction::Up)));
        assert_eq!(command_for_key("s"), Some(InputCommand::Turn(Direction::Down)));
        assert_eq!(command_for_key("a"), Some(InputCommand::Turn(Direction::Left)));
        assert_eq!(command_for_key("ArrowRight"), Some(InputCommand::Turn(Direction::Right)));
        assert_eq!(command_for_key("D"), Some(InputCommand::Turn(Direction::Right)));
    }

    #[test]
    fn pause_keys() {
        assert_eq!(command_for_key(" "), Some(InputCommand::TogglePause));
        assert_eq!(command_for_key("Escape"), Some(InputCommand::TogglePause));
        assert_eq!(command_for_key("Enter"), None);
        assert_eq!(command_for_key("q"), None);
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(swipe_direction(50.0, 10.0, 30.0), Some(Direction::Right));
        assert_eq!(swipe_direction(-50.0, 40.0, 30.0), Some(Direction::Left));
        assert_eq!(swipe_direction(5.0, 31.0, 30.0), Some(Direction::Down));
        assert_eq!(swipe_direction(0.0, -80.0, 30.0), Some(Direction::Up));
    }

    #[test]
    fn short_swipes_do_nothing() {
        assert_eq!(swipe_direction(30.0, 0.0, 30.0), None);
        assert_eq!(swipe_direction(-12.0, 20.0, 30.0), None);
        assert_eq!(swipe_direction(0.0, 0.0, 30.0), None);
    }

    #[test]
    fn diagonal_tie_is_vertical() {
        assert_eq!(swipe_direction(40.0, 40.0, 30.0), Some(Direction::Down));
        assert_eq!(swipe_direction(-40.0, -40.0, 30.0), Some(Direction::Up));
    }
}
