//! Control Loop
//!
//! The game's single owner of mutable state. One [`GameEngine::step`] is
//! one loop iteration: decode the sampled word, apply the command, spawn,
//! render, check for game over. The engine is deterministic; all
//! non-determinism lives behind the input and output ports.

use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::core::hash::{short_hex, StateHash, StateHasher};
use crate::core::rng::LcgRng;
use crate::game::board::Board;
use crate::game::input::{Direction, InputRecording, InputWord};
use crate::game::moves::{apply_move, MoveOutcome};
use crate::game::render::{self, render_board};
use crate::game::spawn::{spawn_one, SpawnedTile};
use crate::game::terminal::is_game_over;
use crate::io::{InputPort, LineSink, NullSink};

/// Where the loop is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopPhase {
    /// Waiting for a ready word
    Idle,
    /// Processing a decoded command
    Applying,
    /// Game over; nothing is processed any more
    Halted,
}

/// What one loop iteration did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Ready flag clear; nothing applied, nothing emitted.
    NotReady,
    /// Choice field did not decode; diagnostic emitted, state untouched.
    Invalid,
    /// Command applied and board rendered; game continues.
    Applied {
        /// Decoded command
        direction: Direction,
        /// Result of the move
        outcome: MoveOutcome,
        /// Tile added after a changing move
        spawned: Option<SpawnedTile>,
    },
    /// Command applied, board rendered, and the game ended.
    GameOver {
        /// Decoded command
        direction: Direction,
        /// Result of the move
        outcome: MoveOutcome,
        /// Tile added after a changing move
        spawned: Option<SpawnedTile>,
    },
    /// The loop already halted.
    Halted,
}

/// Final numbers of a finished (or interrupted) game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Valid commands processed
    pub moves: u32,
    /// Largest tile
    pub max_tile: u32,
    /// Sum of all tiles
    pub total: u64,
    /// Engine state hash
    pub hash: StateHash,
}

/// Board, PRNG and loop state for one game.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    rng: LcgRng,
    moves: u32,
    phase: LoopPhase,
    recording: InputRecording,
}

impl GameEngine {
    /// Start a game: empty board plus two spawned tiles.
    pub fn new(config: EngineConfig) -> Self {
        let mut board = Board::new();
        let mut rng = LcgRng::new(config.seed);
        spawn_one(&mut board, &mut rng);
        spawn_one(&mut board, &mut rng);

        let recording = InputRecording::new(config.seed, config.ready_bit);
        Self {
            config,
            board,
            rng,
            moves: 0,
            phase: LoopPhase::Idle,
            recording,
        }
    }

    /// Resume from an explicit board and generator, without initial spawns.
    pub fn with_board(config: EngineConfig, board: Board, rng: LcgRng) -> Self {
        let recording = InputRecording::new(config.seed, config.ready_bit);
        let phase = if is_game_over(&board) {
            LoopPhase::Halted
        } else {
            LoopPhase::Idle
        };
        Self {
            config,
            board,
            rng,
            moves: 0,
            phase,
            recording,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current generator state.
    pub fn rng(&self) -> &LcgRng {
        &self.rng
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Valid commands processed so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current loop phase.
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// True once the game is over.
    pub fn is_halted(&self) -> bool {
        self.phase == LoopPhase::Halted
    }

    /// Command words applied so far. Empty unless `record_inputs` is set.
    pub fn recording(&self) -> &InputRecording {
        &self.recording
    }

    /// Emit the opening banners and the initial board.
    pub fn start<S: LineSink + ?Sized>(&mut self, out: &mut S) {
        info!(seed = self.config.seed, "game started");
        if self.config.emit_banners {
            out.write_line(render::WELCOME);
        }
        self.render(out);
        if self.config.emit_banners {
            out.write_line(render::HELP);
        }
    }

    /// Run one loop iteration on a sampled word.
    pub fn step<S: LineSink + ?Sized>(&mut self, word: InputWord, out: &mut S) -> StepOutcome {
        if self.is_halted() {
            return StepOutcome::Halted;
        }

        let direction = match word.decode_with(self.config.ready_bit) {
            None => return StepOutcome::NotReady,
            Some(direction) => direction,
        };

        if !direction.is_valid() {
            debug!(word = word.raw(), "invalid command");
            out.write_line(render::INVALID);
            return StepOutcome::Invalid;
        }

        if self.config.record_inputs {
            self.recording.record(word);
        }
        self.phase = LoopPhase::Applying;
        self.moves = self.moves.saturating_add(1);
        out.write_line(&render::choice_line(direction));

        let outcome = apply_move(&mut self.board, direction);
        let spawned = if outcome.changed {
            spawn_one(&mut self.board, &mut self.rng)
        } else {
            None
        };
        debug!(
            ?direction,
            changed = outcome.changed,
            merges = outcome.merges,
            "applied command"
        );

        self.render(out);

        #[cfg(feature = "debug-tracing")]
        tracing::trace!(hash = %short_hex(&self.compute_hash()), "state after move {}", self.moves);

        if is_game_over(&self.board) {
            self.phase = LoopPhase::Halted;
            out.write_line(render::GAME_OVER);
            info!(
                moves = self.moves,
                max_tile = self.board.max_tile(),
                hash = %short_hex(&self.compute_hash()),
                "game over"
            );
            StepOutcome::GameOver { direction, outcome, spawned }
        } else {
            self.phase = LoopPhase::Idle;
            out.write_line(render::PROMPT);
            StepOutcome::Applied { direction, outcome, spawned }
        }
    }

    /// Start the game and poll `input` until the game is over.
    ///
    /// There is no iteration bound: an input that never produces a
    /// game-ending sequence keeps the loop polling forever.
    pub fn run<I, S>(&mut self, input: &mut I, out: &mut S) -> GameSummary
    where
        I: InputPort + ?Sized,
        S: LineSink + ?Sized,
    {
        self.start(out);
        while !self.is_halted() {
            let word = InputWord(input.read_input_word());
            self.step(word, out);
        }
        self.summary()
    }

    /// Hash of board, generator state and move count.
    pub fn compute_hash(&self) -> StateHash {
        let mut hasher = StateHasher::for_engine();
        hasher.update_u32(self.moves);
        hasher.update_u32(self.rng.state());
        hasher.update_bool(self.is_halted());
        self.board.hash_into(&mut hasher);
        hasher.finalize()
    }

    /// Snapshot of the headline numbers.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            moves: self.moves,
            max_tile: self.board.max_tile(),
            total: self.board.total(),
            hash: self.compute_hash(),
        }
    }

    fn render<S: LineSink + ?Sized>(&self, out: &mut S) {
        for line in render_board(&self.board) {
            out.write_line(&line);
        }
    }
}

/// Replay a recording against a fresh game.
///
/// The recording's seed and ready bit override the ones in `config`.
pub fn replay(config: EngineConfig, recording: &InputRecording) -> GameEngine {
    let config = EngineConfig {
        seed: recording.seed,
        ready_bit: recording.ready_bit,
        ..config
    };
    let mut engine = GameEngine::new(config);
    let mut sink = NullSink;
    for word in recording.replay_iter() {
        if engine.step(word, &mut sink) == StepOutcome::Halted {
            break;
        }
    }
    engine
}

// =============================================================================
// TESTS
// =============================================================================
