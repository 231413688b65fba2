//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no I/O, making them usable in any
//! context (grid engine, terminal rendering, headless scripting).
//!
//! # Grid Dimensions
//!
//! The classic game is played on a 4x4 grid. The size is a construction
//! parameter of the grid, bounded by [`MAX_GRID_SIZE`] so that every grid fits
//! in fixed-capacity scratch buffers.
//!
//! # Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles placed when a grid is created |
//! | `SPAWN_TILES_PER_MOVE` | 1 | Tiles placed after a move that changed the grid |
//! | `FOUR_PROBABILITY` | 0.2 | Chance that a spawned tile is a 4 instead of a 2 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.rotations(), (1, 3));
//!
//! let action = GameAction::Move(Direction::Left);
//! assert_eq!(action.direction(), Some(Direction::Left));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default grid size (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Largest supported grid size
pub const MAX_GRID_SIZE: usize = 8;

/// Upper bound on the number of cells of any grid
pub const MAX_CELLS: usize = MAX_GRID_SIZE * MAX_GRID_SIZE;

/// Tiles spawned when a grid is created
pub const INITIAL_TILES: usize = 2;

/// Tiles spawned after every move that changed the grid
pub const SPAWN_TILES_PER_MOVE: usize = 1;

/// Probability that a spawned tile is a 4 (otherwise 2)
pub const FOUR_PROBABILITY: f64 = 0.2;

/// Value of the common spawned tile
pub const SMALL_TILE: u32 = 2;

/// Value of the rare spawned tile
pub const LARGE_TILE: u32 = 4;

/// Largest tile a `u32` cell can hold. Two of these do not merge.
pub const MAX_TILE_VALUE: u32 = 1 << 31;

/// The four user-facing move directions
///
/// Every direction is reduced to the single canonical shift (toward increasing
/// column index, i.e. [`Direction::Right`]) by rotating the grid before and
/// after the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward decreasing row index
    Up,
    /// Toward increasing row index
    Down,
    /// Toward decreasing column index
    Left,
    /// Toward increasing column index (canonical)
    Right,
}

impl Direction {
    /// All directions in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Clockwise quarter turns applied before and after the canonical shift
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Right.rotations(), (0, 0));
    /// assert_eq!(Direction::Left.rotations(), (2, 2));
    /// assert_eq!(Direction::Up.rotations(), (1, 3));
    /// assert_eq!(Direction::Down.rotations(), (3, 1));
    /// ```
    pub fn rotations(&self) -> (u8, u8) {
        match self {
            Direction::Right => (0, 0),
            Direction::Left => (2, 2),
            Direction::Up => (1, 3),
            Direction::Down => (3, 1),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse a single-letter direction code (U, D, L, R; case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to uppercase display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

/// Actions a player can take during a session
///
/// These are produced by the input layer and consumed by the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles toward one edge
    Move(Direction),
    /// Ask to quit (confirmed by a second press)
    Quit,
    /// Ask to restart (confirmed by a second press)
    Restart,
    /// Any other key: leaves a confirmation screen
    Dismiss,
}

impl GameAction {
    /// The move direction, if this is a move
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Move(dir) => Some(*dir),
            _ => None,
        }
    }
}

/// Errors raised while building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be between 1 and {max}, got {size}")]
    InvalidSize { size: usize, max: usize },
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("cell ({row}, {col}) holds {value}, which is neither 0 nor a power of two >= 2")]
    InvalidTileValue { row: usize, col: usize, value: u32 },
}

/// Check whether `value` may be stored in a cell (0 or a power of two >= 2)
pub fn is_valid_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}
