//! Board State
//!
//! The fixed 4x4 grid. A cell value of `0` is empty; every other value is a
//! power of two no smaller than 2.

use serde::{Serialize, Deserialize};

use crate::core::hash::{StateHash, StateHasher};

/// Side length of the board.
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The 4x4 tile grid.
///
/// Indices are `(row, col)` with `(0, 0)` in the top-left corner.
/// Out-of-range indices panic; use [`Board::try_get`] when the index is
/// not known to be valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Alias for [`Board::new`].
    pub const fn create_empty() -> Self {
        Self::new()
    }

    /// Build a board from explicit rows.
    pub const fn from_rows(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Value at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Overwrite the value at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> &[[u32; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterate `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &value)| (row, col, value))
        })
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&(_, _, v)| v == 0).count()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Sum of all tile values.
    pub fn total(&self) -> u64 {
        self.cells().map(|(_, _, v)| u64::from(v)).sum()
    }

    /// Largest tile on the board (0 when empty).
    pub fn max_tile(&self) -> u32 {
        self.cells().map(|(_, _, v)| v).max().unwrap_or(0)
    }

    /// Check that every tile is a power of two of at least 2.
    pub fn is_valid(&self) -> bool {
        self.cells()
            .all(|(_, _, v)| v == 0 || (v >= 2 && v.is_power_of_two()))
    }

    /// Feed the cells into a hasher in row-major order.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        for (_, _, value) in self.cells() {
            hasher.update_u32(value);
        }
    }

    /// Compute the deterministic hash of this board.
    pub fn compute_hash(&self) -> StateHash {
        let mut hasher = StateHasher::for_board();
        self.hash_into(&mut hasher);
        hasher.finalize()
    }
}

// =============================================================================
// TESTS
// =============================================================================
