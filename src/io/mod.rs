//! Boundary Ports (non-deterministic)
//!
//! The engine only sees two operations: read one input word, write one line.
//! Everything behind them (registers, terminals, test scripts) lives here.
//!
//! - `console`: line sinks, including the shared exclusive-per-line console
//! - `scripted`: fixed input sequences for tests and replays
//! - `text`: parsing typed commands into input words

pub mod console;
pub mod scripted;
pub mod text;

pub use console::{SharedConsole, MemorySink, NullSink};
pub use scripted::ScriptedInput;
pub use text::{parse_word, ParseWordError};

/// Source of hardware input words.
///
/// Register semantics: each call returns the most recent value, with no
/// queueing. Failures are not representable here and must be handled by
/// the implementation.
pub trait InputPort {
    /// Sample the current input word.
    fn read_input_word(&mut self) -> u32;
}

impl<F: FnMut() -> u32> InputPort for F {
    fn read_input_word(&mut self) -> u32 {
        self()
    }
}

/// Destination for text lines. The implementation appends the terminator.
pub trait LineSink {
    /// Emit one line.
    fn write_line(&mut self, text: &str);
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, text: &str) {
        (**self).write_line(text);
    }
}
