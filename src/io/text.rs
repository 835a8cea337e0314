//! Typed Commands
//!
//! Lets a terminal stand in for the switch panel. A line is either a raw
//! word (`0x80000010`, `0b1...`, or decimal) or a direction (`w/a/s/d` or
//! `up/left/down/right`) that becomes a ready word.

use crate::game::input::{Direction, InputWord};

/// A line that is neither a number nor a known shortcut.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWordError {
    /// Blank line.
    #[error("empty input")]
    Empty,

    /// Not a number or shortcut.
    #[error("unrecognized input: {0}")]
    Unrecognized(String),
}

/// Parse one typed line into an input word.
pub fn parse_word(line: &str) -> Result<InputWord, ParseWordError> {
    let text = line.trim();
    if text.is_empty() {
        return Err(ParseWordError::Empty);
    }

    let lower = text.to_ascii_lowercase();
    let direction = match lower.as_str() {
        "w" | "up" => Some(Direction::Up),
        "s" | "down" => Some(Direction::Down),
        "a" | "left" => Some(Direction::Left),
        "d" | "right" => Some(Direction::Right),
        _ => None,
    };
    if let Some(direction) = direction {
        return Ok(InputWord::command(direction));
    }

    let digits = lower.replace('_', "");
    let parsed = if let Some(hex) = digits.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = digits.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        digits.parse::<u32>()
    };

    parsed
        .map(InputWord)
        .map_err(|_| ParseWordError::Unrecognized(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts() {
        assert_eq!(parse_word("w"), Ok(InputWord::command(Direction::Up)));
        assert_eq!(parse_word("S"), Ok(InputWord::command(Direction::Down)));
        assert_eq!(parse_word("a"), Ok(InputWord::command(Direction::Left)));
        assert_eq!(parse_word("right"), Ok(InputWord::command(Direction::Right)));
        assert_eq!(parse_word(" d "), Ok(InputWord::command(Direction::Right)));
    }

    #[test]
    fn test_numeric_words() {
        assert_eq!(parse_word("0x80000010"), Ok(InputWord(0x8000_0010)));
        assert_eq!(parse_word("0x8000_0006"), Ok(InputWord(0x8000_0006)));
        assert_eq!(parse_word("0b101"), Ok(InputWord(5)));
        assert_eq!(parse_word("42"), Ok(InputWord(42)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_word("   "), Err(ParseWordError::Empty));
        assert!(matches!(parse_word("jump"), Err(ParseWordError::Unrecognized(_))));
        assert!(matches!(parse_word("0x1_0000_0000"), Err(ParseWordError::Unrecognized(_))));
    }
}
