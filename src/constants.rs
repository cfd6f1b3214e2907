//! Fixed game tuning. The grid is always square.

use crate::model::{Direction, Position};

pub const GRID_SIZE: i32 = 20;

pub const INITIAL_SPEED_MS: u32 = 180;
/// Milliseconds shaved off the tick interval per bamboo eaten.
pub const SPEED_DECREMENT_MS: u32 = 2;
/// Fastest tick interval the game ever reaches.
pub const MIN_SPEED_MS: u32 = 80;

/// Swipes must travel further than this (in CSS pixels) along the dominant axis.
pub const SWIPE_MIN_DISTANCE: f64 = 30.0;

pub const HIGH_SCORE_KEY: &str = "pandaSnakeHighScore";

/// Resample attempts before the food placer gives up and scans the board.
pub const PLACER_MAX_ATTEMPTS: u32 = 4096;

pub const KEYS_UP: [&str; 3] = ["ArrowUp", "w", "W"];
pub const KEYS_DOWN: [&str; 3] = ["ArrowDown", "s", "S"];
pub const KEYS_LEFT: [&str; 3] = ["ArrowLeft", "a", "A"];
pub const KEYS_RIGHT: [&str; 3] = ["ArrowRight", "d", "D"];
pub const KEYS_PAUSE: [&str; 2] = [" ", "Escape"];

pub const START_DIRECTION: Direction = Direction::Right;

/// Layout shown behind the intro overlay before the first game.
pub const IDLE_SNAKE: [Position; 1] = [Position::new(10, 10)];
pub const IDLE_FOOD: Position = Position::new(15, 10);

/// Layout every fresh game starts from.
pub const START_SNAKE: [Position; 3] = [
    Position::new(10, 10),
    Position::new(9, 10),
    Position::new(8, 10),
];
