//! Line Sinks
//!
//! [`SharedConsole`] is the output channel that may be shared with other
//! tasks. Each line is written under one lock acquisition, so lines from
//! different writers never interleave.

use std::io::{self, Stdout, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

use super::LineSink;

/// Cloneable, lock-per-line text channel.
#[derive(Debug)]
pub struct SharedConsole<W: Write> {
    inner: Arc<Mutex<W>>,
}

impl<W: Write> Clone for SharedConsole<W> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl SharedConsole<Stdout> {
    /// Console over process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SharedConsole<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Run `f` with exclusive access to the writer.
    ///
    /// This is how another task holding a clone writes a multi-line block
    /// without game lines landing in the middle of it, or inspects the
    /// writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    fn emit(&self, text: &str) -> io::Result<()> {
        // Guard drops on every return path, including `?`
        let mut out = self.inner.lock();
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}

impl<W: Write> LineSink for SharedConsole<W> {
    fn write_line(&mut self, text: &str) {
        if let Err(e) = self.emit(text) {
            warn!("Failed to write line: {}", e);
        }
    }
}

/// Collects lines in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the collected lines.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl LineSink for MemorySink {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl LineSink for NullSink {
    fn write_line(&mut self, _text: &str) {}
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_console_appends_newline() {
        let mut console = SharedConsole::new(Vec::<u8>::new());
        console.write_line("Game Over!");
        console.write_line("");

        let text = console.with_writer(|buf| String::from_utf8(buf.clone()).unwrap());
        assert_eq!(text, "Game Over!\n\n");
    }

    #[test]
    fn test_console_lines_never_interleave() {
        let console = SharedConsole::new(Vec::<u8>::new());
        let line_a = "A".repeat(200);
        let line_b = "B".repeat(200);

        let handles: Vec<_> = [line_a.clone(), line_b.clone()]
            .into_iter()
            .map(|line| {
                let mut sink = console.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        sink.write_line(&line);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let text = console.with_writer(|buf| String::from_utf8(buf.clone()).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 200);
        for line in lines {
            assert!(line == line_a || line == line_b);
        }
    }

    #[test]
    fn test_block_written_through_clone_stays_whole() {
        let console = SharedConsole::new(Vec::<u8>::new());
        let other = console.clone();

        let writer = thread::spawn(move || {
            for _ in 0..50 {
                other.with_writer(|buf| {
                    buf.extend_from_slice(b"status begin\n");
                    buf.extend_from_slice(b"status end\n");
                });
            }
        });
        let mut game = console.clone();
        for _ in 0..50 {
            game.write_line("Enter move...");
        }
        writer.join().unwrap();

        let text = console.with_writer(|buf| String::from_utf8(buf.clone()).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 150);
        for (i, line) in lines.iter().enumerate() {
            if *line == "status begin" {
                assert_eq!(lines[i + 1], "status end");
            }
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_failure_releases_lock() {
        let mut console = SharedConsole::new(FailingWriter);
        console.write_line("lost");
        // Lock must be free again after the failed write
        console.with_writer(|_| ());
        console.write_line("");
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        sink.write_line("one");
        sink.write_line("two");
        assert_eq!(sink.lines(), ["one", "two"]);
        assert_eq!(sink.take(), vec!["one", "two"]);
        assert!(sink.lines().is_empty());
    }
}
