//! Tile Spawning
//!
//! Places one new tile on a uniformly chosen empty cell.
//! Draw order is part of the replay contract: one draw picks the cell,
//! a second draw picks the value. A full board consumes no draws.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::rng::LcgRng;
use crate::game::board::Board;

/// One draw in this many spawns a 4 instead of a 2.
pub const FOUR_ODDS: u32 = 10;

/// A tile placed by [`spawn_one`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Tile value (2 or 4)
    pub value: u32,
}

/// Spawn one tile on `board`.
///
/// Returns `None` (and leaves board and RNG untouched) when the board is full.
pub fn spawn_one(board: &mut Board, rng: &mut LcgRng) -> Option<SpawnedTile> {
    let empty = board.count_empty();
    if empty == 0 {
        return None;
    }

    let pos = rng.next_below(empty as u32) as usize;
    let (row, col, _) = board
        .cells()
        .filter(|&(_, _, v)| v == 0)
        .nth(pos)?;

    let value = if rng.next_below(FOUR_ODDS) == 0 { 4 } else { 2 };
    board.set(row, col, value);

    debug!(row, col, value, "spawned tile");
    Some(SpawnedTile { row, col, value })
}

// =============================================================================
// TESTS
// =============================================================================
