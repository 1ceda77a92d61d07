//! Error types.
//!
//! Most of these are gameplay signals rather than faults:
//! - `RevealError`: a click the board cannot accept right now. Hosts may ignore it.
//! - `ChallengeError::InvalidAnswer`: counted as a wrong answer by the controller.
//! - `ProgressionError`: level table bounds and the terminal level.
//! - `ConfigError`: rejected at construction time.
//!
//! `GameError` wraps them all for the controller's public API.

use super::card::CardId;

/// Why a card could not be revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RevealError {
    #[error("{0} is not on the board")]
    UnknownCard(CardId),

    #[error("{0} is already face up")]
    AlreadyRevealed(CardId),

    #[error("{0} has already been matched")]
    AlreadyRemoved(CardId),

    /// Two cards are face up and waiting to be compared.
    #[error("a pair is being resolved")]
    ResolutionPending,

    /// A penalty question is open; the board is paused.
    #[error("a penalty challenge is pending")]
    PenaltyPending,

    /// The controller is between levels or the game has ended.
    #[error("board input is locked")]
    InputLocked,
}

/// Penalty challenge errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChallengeError {
    #[error("no challenge is active")]
    NoActiveChallenge,

    /// Input that is not a number or not one of the offered options.
    #[error("invalid answer: {0:?}")]
    InvalidAnswer(String),
}

/// Level table and progression errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("level {level} is beyond the card-count table ({table_len} levels)")]
    LevelTableExhausted { level: u32, table_len: usize },

    #[error("level {0} is the final level")]
    FinalLevel(u32),

    #[error("level {0} is not a valid level ordinal")]
    InvalidLevel(u32),
}

/// Configuration validation errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("level card-count table is empty")]
    EmptyLevelTable,

    #[error("level {level} has {count} cards; counts must be even and non-zero")]
    OddCardCount { level: u32, count: usize },

    #[error("timer settings are invalid: {0}")]
    InvalidTimer(&'static str),

    #[error("miss threshold must be at least 1")]
    ZeroMissThreshold,

    #[error("challenge settings are invalid: {0}")]
    InvalidChallenge(&'static str),

    #[error("layout settings are invalid: {0}")]
    InvalidLayout(&'static str),

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Top-level error for controller operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidReveal(#[from] RevealError),

    #[error(transparent)]
    Challenge(#[from] ChallengeError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A scheduled task outlived the session it was created for.
    #[error("stale task {task} for session {session}")]
    StaleCallback { task: u64, session: u64 },

    /// A click aimed at a board that has since been replaced.
    #[error("input for session {session} arrived after session {current} was dealt")]
    StaleInput { session: u64, current: u64 },

    #[error("the game has not been started")]
    NotStarted,

    #[error("the game is over")]
    GameFinished,
}
