//! Core deterministic primitives.
//!
//! Everything here is platform independent: the same seed and the same
//! sequence of updates produce the same values everywhere.

pub mod rng;
pub mod hash;

// Re-export core types
pub use rng::{LcgRng, INITIAL_SEED};
pub use hash::{StateHash, StateHasher};
