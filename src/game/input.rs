//! Input Decoding and Recording
//!
//! Turns the raw 32-bit hardware word into a [`Direction`].
//! The whole bit layout lives here:
//!
//! ```text
//!  31 30                         5 4 3 2 1 0
//! ┌──┬───────────────────────────┬─┬─┬─┬─┬─┐
//! │R │          unused           │U│D│L│R│ │
//! └──┴───────────────────────────┴─┴─┴─┴─┴─┘
//!  ready                          choice (one-hot)
//! ```

use serde::{Serialize, Deserialize};

// =============================================================================
// BIT LAYOUT
// =============================================================================

/// Bit carrying the "ready" flag.
pub const READY_BIT: u32 = 31;

/// Shift of the 4-bit choice field.
pub const CHOICE_SHIFT: u32 = 1;

/// Mask of the choice field after shifting.
pub const CHOICE_MASK: u32 = 0xF;

/// Choice pattern for Up.
pub const CHOICE_UP: u32 = 0b1000;
/// Choice pattern for Down.
pub const CHOICE_DOWN: u32 = 0b0100;
/// Choice pattern for Left.
pub const CHOICE_LEFT: u32 = 0b0010;
/// Choice pattern for Right.
pub const CHOICE_RIGHT: u32 = 0b0001;

// =============================================================================
// DIRECTION
// =============================================================================

/// Decoded command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Slide towards row 0
    Up,
    /// Slide towards the last row
    Down,
    /// Slide towards column 0
    Left,
    /// Slide towards the last column
    Right,
    /// Choice field did not hold exactly one known bit
    Invalid,
}

impl Direction {
    /// The four playable directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Decode a 4-bit choice field. Anything but a single known bit is Invalid.
    pub fn from_choice(choice: u32) -> Self {
        match choice & CHOICE_MASK {
            CHOICE_UP => Direction::Up,
            CHOICE_DOWN => Direction::Down,
            CHOICE_LEFT => Direction::Left,
            CHOICE_RIGHT => Direction::Right,
            _ => Direction::Invalid,
        }
    }

    /// Choice pattern for this direction (0 for Invalid).
    pub fn choice_bits(self) -> u32 {
        match self {
            Direction::Up => CHOICE_UP,
            Direction::Down => CHOICE_DOWN,
            Direction::Left => CHOICE_LEFT,
            Direction::Right => CHOICE_RIGHT,
            Direction::Invalid => 0,
        }
    }

    /// Lowercase name used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Invalid => "invalid",
        }
    }

    /// True for the four playable directions.
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Direction::Invalid
    }
}

// =============================================================================
// INPUT WORD
// =============================================================================

/// One sampled hardware word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputWord(pub u32);

impl InputWord {
    /// Word with the ready flag clear.
    pub const IDLE: InputWord = InputWord(0);

    /// Build a ready word carrying `direction`.
    pub const fn command(direction: Direction) -> Self {
        let choice = match direction {
            Direction::Up => CHOICE_UP,
            Direction::Down => CHOICE_DOWN,
            Direction::Left => CHOICE_LEFT,
            Direction::Right => CHOICE_RIGHT,
            Direction::Invalid => 0,
        };
        Self::with_choice(choice)
    }

    /// Build a ready word with a raw 4-bit choice field.
    pub const fn with_choice(choice: u32) -> Self {
        InputWord((1 << READY_BIT) | ((choice & CHOICE_MASK) << CHOICE_SHIFT))
    }

    /// Raw value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Check the ready flag at the default position.
    #[inline]
    pub fn is_ready(self) -> bool {
        self.is_ready_at(READY_BIT)
    }

    /// Check the ready flag at a configured bit position.
    #[inline]
    pub fn is_ready_at(self, bit: u32) -> bool {
        (self.0 >> bit) & 1 != 0
    }

    /// The 4-bit choice field.
    #[inline]
    pub fn choice(self) -> u32 {
        (self.0 >> CHOICE_SHIFT) & CHOICE_MASK
    }

    /// Decode the word: `None` when not ready, else the decoded direction.
    pub fn decode(self) -> Option<Direction> {
        self.decode_with(READY_BIT)
    }

    /// Decode using a configured ready bit.
    pub fn decode_with(self, ready_bit: u32) -> Option<Direction> {
        if !self.is_ready_at(ready_bit) {
            return None;
        }
        Some(Direction::from_choice(self.choice()))
    }
}

impl From<u32> for InputWord {
    fn from(raw: u32) -> Self {
        InputWord(raw)
    }
}

// =============================================================================
// INPUT RECORDING
// =============================================================================

/// Errors from encoding or decoding a recording.
#[derive(Debug, thiserror::Error)]
pub enum RecordingError {
    /// Serialization failed.
    #[error("Failed to encode recording: {0}")]
    Encode(bincode::Error),

    /// Bytes did not hold a recording.
    #[error("Failed to decode recording: {0}")]
    Decode(bincode::Error),
}

/// Ordered log of the command words a game applied.
///
/// Idle words and invalid selections are not stored: they never touch game
/// state, so replaying only the applied words reproduces the game exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecording {
    /// Seed the game started from
    pub seed: u32,
    /// Bit the recorded words carry their ready flag in
    pub ready_bit: u32,
    words: Vec<u32>,
}

impl InputRecording {
    /// Create an empty recording for a game started from `seed` whose
    /// words carry the ready flag in `ready_bit`.
    pub fn new(seed: u32, ready_bit: u32) -> Self {
        Self {
            seed,
            ready_bit,
            words: Vec::new(),
        }
    }

    /// Append an applied word.
    pub fn record(&mut self, word: InputWord) {
        self.words.push(word.raw());
    }

    /// All recorded words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of recorded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the recorded words in order.
    pub fn replay_iter(&self) -> impl Iterator<Item = InputWord> + '_ {
        self.words.iter().copied().map(InputWord)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordingError> {
        bincode::serialize(self).map_err(RecordingError::Encode)
    }

    /// Decode from bincode bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordingError> {
        bincode::deserialize(bytes).map_err(RecordingError::Decode)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_mapping() {
        assert_eq!(Direction::from_choice(0b1000), Direction::Up);
        assert_eq!(Direction::from_choice(0b0100), Direction::Down);
        assert_eq!(Direction::from_choice(0b0010), Direction::Left);
        assert_eq!(Direction::from_choice(0b0001), Direction::Right);
    }

    #[test]
    fn test_invalid_choices() {
        for choice in 0..16u32 {
            let expected_valid = choice.count_ones() == 1;
            assert_eq!(
                Direction::from_choice(choice).is_valid(),
                expected_valid,
                "choice {:04b}",
                choice
            );
        }
    }

    #[test]
    fn test_ready_flag() {
        assert!(!InputWord(0).is_ready());
        assert!(!InputWord(0x7FFF_FFFF).is_ready());
        assert!(InputWord(0x8000_0000).is_ready());
        assert!(InputWord(0x8000_0000).is_ready_at(31));
        assert!(InputWord(1).is_ready_at(0));
    }

    #[test]
    fn test_decode() {
        // Not ready: choice ignored
        assert_eq!(InputWord(0b1_0000).decode(), None);

        // Ready, up (bit 4)
        assert_eq!(InputWord(0x8000_0010).decode(), Some(Direction::Up));
        // Ready, right (bit 1)
        assert_eq!(InputWord(0x8000_0002).decode(), Some(Direction::Right));
        // Ready, two bits set
        assert_eq!(InputWord(0x8000_0006).decode(), Some(Direction::Invalid));
        // Ready, no bits set
        assert_eq!(InputWord(0x8000_0000).decode(), Some(Direction::Invalid));
        // Bit 0 and bits above the field do not matter
        assert_eq!(InputWord(0x8000_0105).decode(), Some(Direction::Left));
    }

    #[test]
    fn test_command_words_decode() {
        for dir in Direction::ALL {
            assert_eq!(InputWord::command(dir).decode(), Some(dir));
            assert_eq!(InputWord::command(dir).choice(), dir.choice_bits());
        }
        assert_eq!(
            InputWord::with_choice(0b0011).decode(),
            Some(Direction::Invalid)
        );
    }

    #[test]
    fn test_recording_roundtrip() {
        let mut recording = InputRecording::new(123_456_789, 0);
        recording.record(InputWord::command(Direction::Left));
        recording.record(InputWord::command(Direction::Up));

        let bytes = recording.to_bytes().unwrap();
        let decoded = InputRecording::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, recording);
        assert_eq!(decoded.ready_bit, 0);
        let words: Vec<_> = decoded.replay_iter().collect();
        assert_eq!(
            words,
            vec![
                InputWord::command(Direction::Left),
                InputWord::command(Direction::Up)
            ]
        );
    }

    #[test]
    fn test_recording_decode_garbage() {
        assert!(InputRecording::from_bytes(&[1, 2]).is_err());
    }
}
