//! Grid module - the N x N tile grid
//!
//! The grid owns every cell and the random source used for spawning. Cells are
//! stored in a flat row-major vector (`row * size + col`) and are never absent:
//! an empty slot is a cell with value 0.
//!
//! Only one shift is implemented, toward increasing column index. The other
//! directions rotate the grid first (see the `moves` module).

use arrayvec::ArrayVec;
use tracing::trace;

use crate::cell::Cell;
use crate::rng::TileRng;
use crate::types::{
    is_valid_tile_value, GridError, INITIAL_TILES, LARGE_TILE, MAX_CELLS, MAX_GRID_SIZE,
    SMALL_TILE,
};

/// The tile grid of one game
#[derive(Debug, Clone)]
pub struct Grid<R> {
    size: usize,
    /// Row-major cells, `size * size` of them
    cells: Vec<Cell>,
    /// Largest value ever placed on this grid
    max_value: u32,
    rng: R,
}

impl<R> Grid<R> {
    /// Create an all-empty grid without spawning any tile
    pub fn empty(size: usize, rng: R) -> Result<Self, GridError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::default(); size * size],
            max_value: 0,
            rng,
        })
    }

    /// Build a grid from explicit rows of values
    ///
    /// Rows must form a square of a supported size and every value must be 0 or
    /// a power of two >= 2. No tile is spawned.
    pub fn from_rows<T: AsRef<[u32]>>(rows: &[T], rng: R) -> Result<Self, GridError> {
        let size = rows.len();
        let mut grid = Self::empty(size, rng)?;

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile_value(value) {
                    return Err(GridError::InvalidTileValue { row, col, value });
                }
                grid.cells[row * size + col].set_value(value);
                grid.max_value = grid.max_value.max(value);
            }
        }

        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Running maximum of every value placed, never decreases
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Value at (row, col), `None` if out of bounds
    pub fn value_at(&self, row: usize, col: usize) -> Option<u32> {
        self.cell(row, col).map(Cell::value)
    }

    /// Cell at (row, col), `None` if out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    /// Row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy of all values, one vector per row
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(Cell::value).collect())
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|c| c.value() as u64).sum()
    }

    /// Canonical shift: slide and merge every row toward increasing column
    ///
    /// Each row is scanned from the rightmost column to the leftmost. A tile
    /// keeps stepping right while the next slot is empty; it merges into an
    /// equal neighbour only if neither carries a merge guard, and the merged
    /// destination is then guarded for the rest of the pass. So every resulting
    /// tile takes part in at most one merge per move.
    ///
    /// Returns true if any tile moved or merged.
    pub fn shift_right(&mut self) -> bool {
        let n = self.size;
        let mut changed = false;

        for row in 0..n {
            let base = row * n;
            for col in (0..n).rev() {
                self.cells[base + col].set_merge_guard(false);
                if self.cells[base + col].is_empty() {
                    continue;
                }

                let mut pos = col;
                while pos + 1 < n {
                    let here = base + pos;
                    let (left, right) = self.cells.split_at_mut(here + 1);
                    let cur = &mut left[here];
                    let next = &mut right[0];

                    if next.is_empty() {
                        next.set_value(cur.value());
                        cur.clear();
                        changed = true;
                        pos += 1;
                    } else if cur.can_merge_with(next)
                        && !cur.merge_guard()
                        && !next.merge_guard()
                    {
                        cur.merge_over(next);
                        next.set_merge_guard(true);
                        self.max_value = self.max_value.max(next.value());
                        changed = true;
                        break;
                    } else {
                        break;
                    }
                }
            }
        }

        self.clear_merge_guards();
        changed
    }

    /// Rotate clockwise by `turns` quarter turns (taken modulo 4)
    ///
    /// With n = size - 1 the new cell (i, j) takes its value from
    /// (n - j, i) for 90°, (n - i, n - j) for 180° and (j, n - i) for 270°.
    /// Merge guards are cleared.
    pub fn rotate(&mut self, turns: u8) {
        let turns = turns % 4;
        if turns == 0 {
            self.clear_merge_guards();
            return;
        }

        let n = self.size;
        let last = n - 1;
        let old: ArrayVec<u32, MAX_CELLS> = self.cells.iter().map(Cell::value).collect();

        for i in 0..n {
            for j in 0..n {
                let (si, sj) = match turns {
                    1 => (last - j, i),
                    2 => (last - i, last - j),
                    _ => (j, last - i),
                };
                self.cells[i * n + j] = Cell::new(old[si * n + sj]);
            }
        }
    }

    /// True if an empty cell exists or two orthogonal neighbours can merge
    pub fn can_move(&self) -> bool {
        let n = self.size;
        if self.cells.iter().any(Cell::is_empty) {
            return true;
        }

        for row in 0..n {
            for col in 0..n {
                let cell = &self.cells[row * n + col];
                if col + 1 < n && cell.can_merge_with(&self.cells[row * n + col + 1]) {
                    return true;
                }
                if row + 1 < n && cell.can_merge_with(&self.cells[(row + 1) * n + col]) {
                    return true;
                }
            }
        }
        false
    }

    fn clear_merge_guards(&mut self) {
        for cell in &mut self.cells {
            cell.set_merge_guard(false);
        }
    }

    /// Overwrite one cell, keeping the max value current
    ///
    /// Returns false if out of bounds or the value is not a valid tile.
    pub fn set_value(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.index(row, col) {
            Some(idx) if is_valid_tile_value(value) => {
                self.cells[idx].set_value(value);
                self.max_value = self.max_value.max(value);
                true
            }
            _ => false,
        }
    }
}

impl<R: TileRng> Grid<R> {
    /// Create a grid of `size` x `size` and place the two starting tiles
    pub fn new(size: usize, rng: R) -> Result<Self, GridError> {
        let mut grid = Self::empty(size, rng)?;
        grid.spawn_random(INITIAL_TILES);
        Ok(grid)
    }

    /// Discard every tile and place fresh starting tiles
    ///
    /// The random source carries on from its current state.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
        self.max_value = 0;
        self.spawn_random(INITIAL_TILES);
    }

    /// Place up to `count` random tiles on empty cells
    ///
    /// The empty coordinates are collected once. Each placement picks one of
    /// them uniformly and removes it from the list, so tiles placed in the same
    /// call never land on the same cell; placements beyond the number of empty
    /// cells are skipped. A tile is a 2 with probability 0.8 and a 4 otherwise.
    ///
    /// Returns false, without touching the grid, if no cell is empty.
    pub fn spawn_random(&mut self, count: usize) -> bool {
        let mut available: ArrayVec<usize, MAX_CELLS> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(idx, _)| idx)
            .collect();

        if available.is_empty() {
            return false;
        }

        for _ in 0..count {
            if available.is_empty() {
                break;
            }
            let pick = self.rng.pick_index(available.len());
            let idx = available.swap_remove(pick);
            let value = if self.rng.pick_four() {
                LARGE_TILE
            } else {
                SMALL_TILE
            };

            self.cells[idx].set_value(value);
            self.max_value = self.max_value.max(value);
            trace!(row = idx / self.size, col = idx % self.size, value, "spawned tile");
        }

        true
    }
}

fn check_size(size: usize) -> Result<(), GridError> {
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(GridError::InvalidSize {
            size,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(())
}
