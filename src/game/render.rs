//! Text Rendering
//!
//! Fixed-width grid and status lines written to the output port.
//!
//! ```text
//! |--------|--------|--------|--------|
//! |        |      2 |        |        |
//! |        |        |        |      4 |
//! |--------|--------|--------|--------|
//! ```

use crate::game::board::Board;
use crate::game::input::Direction;

/// Horizontal rule above and below the grid.
pub const RULE: &str = "|--------|--------|--------|--------|";

/// Width of the numeric field inside a cell (the cell is this plus " |").
pub const FIELD_WIDTH: usize = 7;

/// Printed once before the first board.
pub const WELCOME: &str = "Welcome to 2048!";

/// Printed once after the first board.
pub const HELP: &str = "Use switches to move left, right, up, down. Press N17 to confirm.";

/// Printed after each board while the game continues.
pub const PROMPT: &str = "Enter move...";

/// Printed when the choice field does not decode.
pub const INVALID: &str = "Invalid move!";

/// Printed once when the game ends.
pub const GAME_OVER: &str = "Game Over!";

/// "Your choice is: <direction>"
pub fn choice_line(direction: Direction) -> String {
    format!("Your choice is: {}", direction.label())
}

/// Render one grid row. Empty cells are blank.
pub fn render_row(cells: &[u32]) -> String {
    let mut line = String::with_capacity(RULE.len());
    line.push('|');
    for &value in cells {
        if value == 0 {
            line.push_str(&format!("{:>width$} |", "", width = FIELD_WIDTH));
        } else {
            line.push_str(&format!("{:>width$} |", value, width = FIELD_WIDTH));
        }
    }
    line
}

/// Render the whole board: rule, four rows, rule, blank line.
pub fn render_board(board: &Board) -> Vec<String> {
    let mut lines = Vec::with_capacity(board.rows().len() + 3);
    lines.push(RULE.to_string());
    lines.extend(board.rows().iter().map(|row| render_row(row)));
    lines.push(RULE.to_string());
    lines.push(String::new());
    lines
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_row() {
        assert_eq!(render_row(&[0; 4]), "|        |        |        |        |");
    }

    #[test]
    fn test_render_row_right_justified() {
        assert_eq!(
            render_row(&[2, 64, 1024, 131072]),
            "|      2 |     64 |   1024 | 131072 |"
        );
    }

    #[test]
    fn test_rows_align_with_rule() {
        let board = Board::from_rows([[2, 4, 8, 16]; 4]);
        for line in render_board(&board).iter().take(6) {
            assert_eq!(line.len(), RULE.len());
        }
    }

    #[test]
    fn test_render_board_layout() {
        let mut board = Board::new();
        board.set(1, 1, 2);
        board.set(2, 3, 4);

        let lines = render_board(&board);
        assert_eq!(
            lines,
            vec![
                RULE.to_string(),
                "|        |        |        |        |".to_string(),
                "|        |      2 |        |        |".to_string(),
                "|        |        |        |      4 |".to_string(),
                "|        |        |        |        |".to_string(),
                RULE.to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_choice_line() {
        assert_eq!(choice_line(Direction::Up), "Your choice is: up");
        assert_eq!(choice_line(Direction::Right), "Your choice is: right");
    }
}
