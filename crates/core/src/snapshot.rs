//! Read-only views of the grid and session for renderers and observers.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::session::Screen;
use crate::types::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: usize,
    /// Row-major values, 0 for empty
    pub cells: Vec<u32>,
    /// Row-major `Cell::rank` of each value, 0 for empty
    pub ranks: Vec<u8>,
    pub max_value: u32,
    pub can_move: bool,
}

impl GridSnapshot {
    pub fn value_at(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    pub fn rank_at(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.ranks.get(row * self.size + col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl<R> From<&Grid<R>> for GridSnapshot {
    fn from(grid: &Grid<R>) -> Self {
        Self {
            size: grid.size(),
            cells: grid.cells().iter().map(Cell::value).collect(),
            ranks: grid.cells().iter().map(Cell::rank).collect(),
            max_value: grid.max_value(),
            can_move: grid.can_move(),
        }
    }
}

impl<R> Grid<R> {
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: GridSnapshot,
    pub moves: u32,
    pub last_move: Option<Direction>,
    pub last_move_changed: bool,
    pub screen: Screen,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.screen == Screen::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    #[test]
    fn snapshot_copies_values_and_status() {
        let grid = Grid::from_rows(&[[2, 4], [8, 16]], ScriptedRng::default()).unwrap();
        let snap = grid.snapshot();

        assert_eq!(snap.size, 2);
        assert_eq!(snap.cells, vec![2, 4, 8, 16]);
        assert_eq!(snap.max_value, 16);
        assert!(!snap.can_move);
        assert_eq!(snap.value_at(1, 0), Some(8));
        assert_eq!(snap.value_at(2, 0), None);
        assert_eq!(snap.ranks, vec![1, 2, 3, 4]);
        assert_eq!(snap.rank_at(1, 1), Some(4));
        assert_eq!(snap.rank_at(0, 2), None);

        let rows: Vec<&[u32]> = snap.rows().collect();
        let expected: Vec<&[u32]> = vec![&[2, 4], &[8, 16]];
        assert_eq!(rows, expected);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let grid = Grid::from_rows(&[[0, 2], [0, 0]], ScriptedRng::default()).unwrap();
        let json = serde_json::to_value(grid.snapshot()).unwrap();

        assert_eq!(json["size"], 2);
        assert_eq!(json["cells"], serde_json::json!([0, 2, 0, 0]));
        assert_eq!(json["can_move"], true);
    }
}
