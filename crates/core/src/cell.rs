//! Cell module - a single grid slot
//!
//! A cell holds a tile value (0 = empty, otherwise a power of two >= 2) and a
//! transient merge guard that is only meaningful inside one shift pass.

use crate::types::{is_valid_tile_value, MAX_TILE_VALUE};

/// One slot of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    value: u32,
    /// log2(value), 0 when empty. Refreshed on every value change.
    rank: u8,
    merge_guard: bool,
}

impl Cell {
    /// Create a cell holding `value`
    pub fn new(value: u32) -> Self {
        let mut cell = Self::default();
        cell.set_value(value);
        cell
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Set the tile value and refresh derived state
    pub fn set_value(&mut self, value: u32) {
        debug_assert!(is_valid_tile_value(value), "invalid tile value {}", value);
        self.value = value;
        self.refresh();
    }

    /// Empty the cell
    pub fn clear(&mut self) {
        self.set_value(0);
    }

    /// Exponent of the value (2 -> 1, 4 -> 2, ...), 0 for an empty cell
    ///
    /// Renderers index their palettes by this.
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Compare values only. Two empty cells compare equal.
    pub fn equals_value(&self, other: &Cell) -> bool {
        self.value == other.value
    }

    /// Equal, non-empty, and small enough that the doubled value still fits
    pub fn can_merge_with(&self, other: &Cell) -> bool {
        !self.is_empty() && self.equals_value(other) && self.value < MAX_TILE_VALUE
    }

    pub fn merge_guard(&self) -> bool {
        self.merge_guard
    }

    pub fn set_merge_guard(&mut self, guard: bool) {
        self.merge_guard = guard;
    }

    /// Merge this cell into `other`
    ///
    /// `other` becomes twice this cell's value and this cell becomes empty.
    /// Callers check [`Cell::can_merge_with`] first.
    pub fn merge_over(&mut self, other: &mut Cell) {
        debug_assert!(self.can_merge_with(other));
        other.set_value(self.value * 2);
        self.clear();
    }

    fn refresh(&mut self) {
        self.rank = if self.value == 0 {
            0
        } else {
            self.value.trailing_zeros() as u8
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.value(), 0);
        assert_eq!(cell.rank(), 0);
        assert!(!cell.merge_guard());
    }

    #[test]
    fn test_set_value_refreshes_rank() {
        let mut cell = Cell::new(2);
        assert_eq!(cell.rank(), 1);
        cell.set_value(2048);
        assert_eq!(cell.rank(), 11);
        cell.clear();
        assert_eq!(cell.rank(), 0);
        assert!(cell.is_empty());
    }

    #[test]
    fn test_equals_value() {
        assert!(Cell::new(4).equals_value(&Cell::new(4)));
        assert!(!Cell::new(4).equals_value(&Cell::new(8)));
        // Empty cells are equal to each other.
        assert!(Cell::default().equals_value(&Cell::default()));
    }

    #[test]
    fn test_merge_over_empties_source_and_doubles_destination() {
        let mut src = Cell::new(8);
        let mut dst = Cell::new(8);
        src.merge_over(&mut dst);

        assert!(src.is_empty());
        assert_eq!(src.rank(), 0);
        assert_eq!(dst.value(), 16);
        assert_eq!(dst.rank(), 4);
    }

    #[test]
    fn test_can_merge_with() {
        assert!(Cell::new(2).can_merge_with(&Cell::new(2)));
        assert!(Cell::new(1 << 30).can_merge_with(&Cell::new(1 << 30)));
        assert!(!Cell::new(2).can_merge_with(&Cell::new(4)));
        assert!(!Cell::default().can_merge_with(&Cell::default()));
        assert!(!Cell::new(MAX_TILE_VALUE).can_merge_with(&Cell::new(MAX_TILE_VALUE)));
    }

    #[test]
    fn test_merge_guard_flag() {
        let mut cell = Cell::new(2);
        cell.set_merge_guard(true);
        assert!(cell.merge_guard());
        cell.set_merge_guard(false);
        assert!(!cell.merge_guard());
    }
}
