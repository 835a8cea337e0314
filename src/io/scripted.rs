//! Scripted Input

use std::collections::VecDeque;

use super::InputPort;
use crate::game::input::InputWord;

/// Plays back a fixed sequence of words, then repeats an idle word.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    words: VecDeque<u32>,
    idle: u32,
    reads: u64,
}

impl ScriptedInput {
    /// Script from raw words; the idle word after exhaustion is 0.
    pub fn new(words: impl IntoIterator<Item = u32>) -> Self {
        Self {
            words: words.into_iter().collect(),
            idle: InputWord::IDLE.raw(),
            reads: 0,
        }
    }

    /// Script from typed words.
    pub fn from_words(words: impl IntoIterator<Item = InputWord>) -> Self {
        Self::new(words.into_iter().map(InputWord::raw))
    }

    /// Word returned once the script runs out.
    pub fn with_idle(mut self, idle: u32) -> Self {
        self.idle = idle;
        self
    }

    /// Words not yet read.
    pub fn remaining(&self) -> usize {
        self.words.len()
    }

    /// Total number of reads served.
    pub fn reads(&self) -> u64 {
        self.reads
    }
}

impl InputPort for ScriptedInput {
    fn read_input_word(&mut self) -> u32 {
        self.reads += 1;
        self.words.pop_front().unwrap_or(self.idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::input::Direction;

    #[test]
    fn test_script_then_idle() {
        let mut input = ScriptedInput::from_words([InputWord::command(Direction::Up)]);
        assert_eq!(input.remaining(), 1);
        assert_eq!(
            input.read_input_word(),
            InputWord::command(Direction::Up).raw()
        );
        assert_eq!(input.read_input_word(), 0);
        assert_eq!(input.read_input_word(), 0);
        assert_eq!(input.reads(), 3);
    }

    #[test]
    fn test_custom_idle() {
        let mut input = ScriptedInput::new(Vec::<u32>::new()).with_idle(0x7FFF_FFFF);
        assert_eq!(input.read_input_word(), 0x7FFF_FFFF);
    }
}
