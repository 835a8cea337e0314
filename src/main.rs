//! Tile Merge
//!
//! Terminal front end: each stdin line stands in for one sampled hardware
//! word, the board goes to stdout, logs go to stderr.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tile_merge::{
    VERSION,
    config::{EngineConfig, CONFIG_ENV},
    core::hash::short_hex,
    game::engine::{GameEngine, StepOutcome},
    io::{parse_word, ParseWordError, SharedConsole},
};

/// Environment variable naming a file to save the input recording to.
const RECORD_ENV: &str = "TILE_MERGE_RECORD";

fn main() -> Result<()> {
    let mut config = load_config()?;
    let record_path = std::env::var_os(RECORD_ENV).map(PathBuf::from);
    if record_path.is_some() {
        config.record_inputs = true;
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("Invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Tile Merge v{}", VERSION);
    info!("Seed: {}, ready bit: {}", config.seed, config.ready_bit);

    let mut console = SharedConsole::stdout();
    let mut engine = GameEngine::new(config);
    engine.start(&mut console);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let word = match parse_word(&line) {
            Ok(word) => word,
            Err(ParseWordError::Empty) => continue,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        if let StepOutcome::GameOver { .. } = engine.step(word, &mut console) {
            break;
        }
    }

    if !engine.is_halted() {
        info!("Input closed before game over");
    }

    let summary = engine.summary();
    info!(
        "Moves: {}, max tile: {}, total: {}",
        summary.moves, summary.max_tile, summary.total
    );
    info!("Final State Hash: {}", short_hex(&summary.hash));

    if let Some(path) = record_path {
        let bytes = engine.recording().to_bytes()?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write recording to {}", path.display()))?;
        info!("Recording saved to {}", path.display());
    }

    Ok(())
}

/// Config file from the first argument, else from the environment, else defaults.
fn load_config() -> Result<EngineConfig> {
    let path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from);

    match path {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}
