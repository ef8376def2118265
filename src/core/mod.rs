//! Core types: configuration, errors, turn phases, deterministic RNG.

pub mod config;
pub mod error;
pub mod phase;
pub mod rng;

pub use config::{GameConfig, DEFAULT_KINGDOM_PILES};
pub use error::{GameError, HookError};
pub use phase::Phase;
pub use rng::{GameRng, GameRngState};
