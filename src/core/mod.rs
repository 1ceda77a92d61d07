//! Core types: cards, configuration, errors, RNG.
//!
//! Everything else in the crate builds on these.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{Card, CardFace, CardId, PairKey};
pub use config::{
    ChallengeConfig, GameConfig, ImageConfig, LayoutConfig, LevelOverflow, TimerConfig, Timings,
};
pub use error::{ChallengeError, ConfigError, GameError, ProgressionError, RevealError};
pub use rng::{GameRng, GameRngState};
