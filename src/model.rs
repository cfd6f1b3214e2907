//! Core data types shared by the simulation, input handling and the renderer.

use serde::{Deserialize, Serialize};

use crate::constants::GRID_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`. May lie outside the grid.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Screen-space offset; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Rotation applied to the head sprite, which faces right at 0°.
    pub fn rotation_deg(self) -> i32 {
        match self {
            Direction::Right => 0,
            Direction::Down => 90,
            Direction::Left => 180,
            Direction::Up => 270,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn label(self) -> &'static str {
        match self {
            GameStatus::Idle => "Ready",
            GameStatus::Playing => "Playing",
            GameStatus::Paused => "Paused",
            GameStatus::GameOver => "Game Over",
        }
    }
}

/// Everything the renderer needs to paint one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Head first.
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub status: GameStatus,
    pub score: u32,
    pub high_score: u32,
    /// This game beat the best score stored before it started.
    pub new_best: bool,
    pub speed_ms: u32,
}

impl Snapshot {
    /// Index of the segment covering `pos`, 0 being the head.
    pub fn segment_at(&self, pos: Position) -> Option<usize> {
        self.snake.iter().position(|p| *p == pos)
    }
}
