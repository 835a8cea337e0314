//! Slide and Merge
//!
//! One scan drives all four directions. Each line (a row for Left/Right, a
//! column for Up/Down) is walked by its distance from the target edge:
//! position 0 touches the edge, position 3 is farthest away.
//!
//! Tiles are visited from position 1 outwards and stepped towards the edge
//! one cell at a time, so a tile can pass over cells the tiles in front of
//! it have just vacated. A tile stops when it merges, when it is blocked by
//! a different value, or when it reaches the edge. A tile produced by a
//! merge is locked for the rest of the move.

use serde::{Serialize, Deserialize};

use crate::game::board::{Board, BOARD_SIZE};
use crate::game::input::Direction;

/// Result of applying one move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// At least one tile slid or merged
    pub changed: bool,
    /// Number of merges performed
    pub merges: u32,
    /// Sum of the tiles created by merges
    pub merged_value: u64,
}

impl MoveOutcome {
    /// Net gain of the merge destinations: each merge of two `v` tiles
    /// grows its destination cell by `v`. The board total is unchanged.
    pub fn destination_growth(&self) -> u64 {
        self.merged_value / 2
    }
}

/// Map a line index and a distance from the target edge to `(row, col)`.
#[inline]
fn cell_at(direction: Direction, line: usize, pos: usize) -> (usize, usize) {
    let far = BOARD_SIZE - 1;
    match direction {
        Direction::Left => (line, pos),
        Direction::Right => (line, far - pos),
        Direction::Up => (pos, line),
        Direction::Down => (far - pos, line),
        Direction::Invalid => unreachable!("invalid direction has no scan order"),
    }
}

/// Apply a move in `direction`.
///
/// `Direction::Invalid` leaves the board untouched and reports no change.
pub fn apply_move(board: &mut Board, direction: Direction) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    if !direction.is_valid() {
        return outcome;
    }

    for line in 0..BOARD_SIZE {
        // Positions holding a tile created by a merge this move
        let mut locked = [false; BOARD_SIZE];

        for pos in 1..BOARD_SIZE {
            let (row, col) = cell_at(direction, line, pos);
            if board.get(row, col) == 0 {
                continue;
            }

            let mut k = pos;
            while k > 0 {
                let (sr, sc) = cell_at(direction, line, k);
                let (tr, tc) = cell_at(direction, line, k - 1);
                let value = board.get(sr, sc);
                let target = board.get(tr, tc);

                if target == 0 {
                    board.set(tr, tc, value);
                    board.set(sr, sc, 0);
                    outcome.changed = true;
                    k -= 1;
                } else if target == value && !locked[k - 1] {
                    // The largest u32 tile cannot double; it blocks like any other
                    let merged = match value.checked_mul(2) {
                        Some(merged) => merged,
                        None => break,
                    };
                    board.set(tr, tc, merged);
                    board.set(sr, sc, 0);
                    locked[k - 1] = true;
                    outcome.changed = true;
                    outcome.merges += 1;
                    outcome.merged_value += u64::from(merged);
                    break;
                } else {
                    break;
                }
            }
        }
    }

    outcome
}

/// Slide everything towards column 0.
pub fn move_left(board: &mut Board) -> MoveOutcome {
    apply_move(board, Direction::Left)
}

/// Slide everything towards the last column.
pub fn move_right(board: &mut Board) -> MoveOutcome {
    apply_move(board, Direction::Right)
}

/// Slide everything towards row 0.
pub fn move_up(board: &mut Board) -> MoveOutcome {
    apply_move(board, Direction::Up)
}

/// Slide everything towards the last row.
pub fn move_down(board: &mut Board) -> MoveOutcome {
    apply_move(board, Direction::Down)
}

// =============================================================================
// TESTS
// =============================================================================
