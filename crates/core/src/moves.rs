//! Move resolution - maps the four directions onto the canonical shift
//!
//! | Direction | Sequence |
//! |-----------|----------|
//! | Right | shift |
//! | Left | rotate 180° → shift → rotate 180° |
//! | Up | rotate 90° → shift → rotate 270° |
//! | Down | rotate 270° → shift → rotate 90° |

use tracing::debug;

use crate::grid::Grid;
use crate::types::Direction;

impl<R> Grid<R> {
    /// Slide and merge all tiles toward `direction`
    ///
    /// Returns whether any tile moved or merged. No tile is spawned here.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let (before, after) = direction.rotations();
        self.rotate(before);
        let changed = self.shift_right();
        self.rotate(after);

        debug!(
            direction = direction.as_str(),
            changed,
            max = self.max_value(),
            "resolved move"
        );
        changed
    }

    /// Directions that would change the grid, without mutating it
    pub fn legal_moves(&self) -> Vec<Direction>
    where
        R: Clone,
    {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.clone().apply_move(dir))
            .collect()
    }
}
