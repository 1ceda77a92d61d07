//! # pair-recall
//!
//! Game engine for a levelled memory-matching card game, independent of any
//! rendering technology.
//!
//! ## Rules
//!
//! 1. **Levels**: each level deals more cards (8, 12, ... 64 by default) with
//!    its own content theme. Clearing the final level wins the game.
//!
//! 2. **Pairs**: two cards match when they share a pair key. Heterogeneous
//!    themes (problem/solution, flag/name) match on the key, not the face.
//!
//! 3. **Penalty**: consecutive misses open a timed arithmetic question.
//!    A right answer resumes play; a wrong answer or timeout restarts the
//!    game at level 1.
//!
//! ## Architecture
//!
//! - **Single-threaded, event-driven**: the host feeds clicks and elapsed time
//!   into `GameController`; delayed steps run on a virtual clock and are
//!   tagged with the board they belong to, so leftovers from a torn-down
//!   board are dropped.
//!
//! - **Deterministic**: one seed drives content, shuffling and questions
//!   through independent RNG streams.
//!
//! ## Modules
//!
//! - `core`: Cards, configuration, errors, RNG
//! - `content`: Per-level card content
//! - `board`: Shuffling, dealing and grid layout
//! - `matching`: Reveal/resolve state machine
//! - `penalty`: Timed penalty question
//! - `progression`: Level table and countdown budgets
//! - `controller`: Orchestration, scheduling, renderer seam, events

pub mod board;
pub mod content;
pub mod controller;
pub mod core;
pub mod matching;
pub mod penalty;
pub mod progression;

// Re-export commonly used types
pub use crate::core::{
    Card, CardFace, CardId, PairKey,
    GameConfig, LevelOverflow, TimerConfig, Timings, LayoutConfig, ChallengeConfig, ImageConfig,
    GameError, RevealError, ChallengeError, ProgressionError, ConfigError,
    GameRng, GameRngState,
};

pub use crate::content::{CardContent, ContentFamily, ContentPair, ContentProvider, StandardContent};

pub use crate::board::{deal, shuffle, BoardLayout};

pub use crate::matching::{MatchEngine, MatchPhase, Resolution};

pub use crate::penalty::{Challenge, ChallengeId, ChallengeOutcome, Countdown, PenaltyChallenge};

pub use crate::progression::{Level, LevelProgression};

pub use crate::controller::{
    Effect, GameController, GameEvent, GamePhase, GameSession, NullRenderer, Renderer,
    Scheduler, SessionId, TaskId, TaskKind,
};
