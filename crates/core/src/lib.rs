//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid rules of the sliding-tile merge game. It has
//! **no dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical games
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: runs in a terminal, headless, or under a benchmark harness
//!
//! # Module Structure
//!
//! - [`cell`]: a single slot with its value and per-move merge guard
//! - [`grid`]: the N x N grid with the canonical shift, rotation, spawning and
//!   the movability test
//! - [`moves`]: reduces the four directions to the canonical shift
//! - [`rng`]: the random source seam used for spawning
//! - [`snapshot`]: read-only views for renderers and observers
//! - [`session`]: one game with move counter and confirmation screens
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbours merge into one
//!   tile of double value, at most once per resulting tile per move
//! - A move that changed the grid spawns one tile: 2 (80%) or 4 (20%)
//! - A new grid starts with two tiles
//! - The game ends when no cell is empty and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tui_2048_core::Grid;
//! use tui_2048_types::Direction;
//!
//! let mut grid = Grid::new(4, StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(grid.empty_count(), 14);
//!
//! if grid.apply_move(Direction::Left) {
//!     grid.spawn_random(1);
//! }
//! assert!(grid.can_move());
//! ```

pub mod cell;
pub mod grid;
pub mod moves;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use cell::Cell;
pub use grid::Grid;
pub use rng::{ScriptedRng, TileRng};
pub use session::{Flow, GameConfig, GameSession, Screen};
pub use snapshot::{GameSnapshot, GridSnapshot};
