//! Engine Configuration
//!
//! Defaults reproduce the reference game exactly. A JSON file can override
//! any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::core::rng::INITIAL_SEED;
use crate::game::input::{CHOICE_MASK, CHOICE_SHIFT, READY_BIT};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TILE_MERGE_CONFIG";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the file.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid JSON for this config.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Ready flag would overlap the choice field or fall outside the word.
    #[error("Invalid ready bit {0}: must be 0 or 5..=31")]
    InvalidReadyBit(u32),
}

/// Configuration for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// PRNG seed at process start.
    pub seed: u32,
    /// Bit of the input word carrying the ready flag.
    pub ready_bit: u32,
    /// Print welcome and help banners around the first board.
    pub emit_banners: bool,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Keep a log of applied command words for replay.
    pub record_inputs: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: INITIAL_SEED,
            ready_bit: READY_BIT,
            emit_banners: true,
            log_filter: "info".to_string(),
            record_inputs: false,
        }
    }
}

impl EngineConfig {
    /// Parse from JSON text and validate.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject a ready bit that aliases the choice field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let choice_bits = CHOICE_SHIFT..CHOICE_SHIFT + CHOICE_MASK.count_ones();
        if self.ready_bit > 31 || choice_bits.contains(&self.ready_bit) {
            return Err(ConfigError::InvalidReadyBit(self.ready_bit));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
