//! Game Over Detection

use crate::game::board::{Board, BOARD_SIZE};

/// True when some horizontally or vertically adjacent pair holds equal
/// tiles that can still merge.
pub fn has_adjacent_pair(board: &Board) -> bool {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let value = board.get(row, col);
            // Empty cells and the undoublable top tile never merge
            if value == 0 || value.checked_mul(2).is_none() {
                continue;
            }
            if col + 1 < BOARD_SIZE && board.get(row, col + 1) == value {
                return true;
            }
            if row + 1 < BOARD_SIZE && board.get(row + 1, col) == value {
                return true;
            }
        }
    }
    false
}

/// The game is over when the board is full and no move could merge.
pub fn is_game_over(board: &Board) -> bool {
    board.is_full() && !has_adjacent_pair(board)
}

// =============================================================================
// TESTS
// =============================================================================
