//! Game Logic Module
//!
//! All game code. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `board`: The 4x4 grid
//! - `input`: Hardware word decoding, input recording
//! - `spawn`: Random tile placement
//! - `moves`: Slide and merge
//! - `terminal`: Game over detection
//! - `render`: Text grid and status lines
//! - `engine`: Control loop and state ownership

pub mod board;
pub mod input;
pub mod spawn;
pub mod moves;
pub mod terminal;
pub mod render;
pub mod engine;

// Re-export key types
pub use board::{Board, BOARD_SIZE};
pub use input::{Direction, InputWord, InputRecording};
pub use spawn::{spawn_one, SpawnedTile};
pub use moves::{apply_move, move_down, move_left, move_right, move_up, MoveOutcome};
pub use terminal::is_game_over;
pub use engine::{GameEngine, GameSummary, LoopPhase, StepOutcome, replay};
