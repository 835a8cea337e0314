//! # Tile Merge
//!
//! Deterministic 2048 engine driven by a polled hardware input word.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TILE MERGE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - 32-bit LCG, 15-bit output                 │
//! │  └── hash.rs     - State hashing for replay checks           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── board.rs    - 4x4 grid                                  │
//! │  ├── input.rs    - Input word decoding and recording         │
//! │  ├── spawn.rs    - Tile spawning                             │
//! │  ├── moves.rs    - Slide and merge                           │
//! │  ├── terminal.rs - Game over detection                       │
//! │  ├── render.rs   - Text grid                                 │
//! │  └── engine.rs   - Control loop                              │
//! │                                                              │
//! │  io/             - Boundary ports (non-deterministic)        │
//! │  ├── console.rs  - Line sinks                                │
//! │  ├── scripted.rs - Scripted input                            │
//! │  └── text.rs     - Typed command parsing                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given the same seed and the same sequence of ready input words, a game
//! produces identical boards, output lines and state hashes everywhere.
//! Idle words never touch game state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod io;

// Re-export commonly used types
pub use config::{EngineConfig, ConfigError};
pub use crate::core::rng::{LcgRng, INITIAL_SEED};
pub use game::board::{Board, BOARD_SIZE};
pub use game::input::{Direction, InputWord, InputRecording};
pub use game::engine::{GameEngine, GameSummary, StepOutcome};
pub use io::{InputPort, LineSink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
