//! Observable game events.
//!
//! The controller queues these as it runs; hosts drain them with
//! `GameController::take_events()` and wire them to presentation or audio.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::penalty::{ChallengeId, ChallengeOutcome};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new board was dealt.
    LevelStarted { level: u32, card_count: usize },
    CardRevealed { card: CardId },
    Match { first: CardId, second: CardId },
    Mismatch { first: CardId, second: CardId, misses: u32 },
    PenaltyTriggered {
        challenge: ChallengeId,
        question: String,
        options: Vec<u32>,
        budget_secs: u32,
    },
    ChallengeTick { remaining_secs: u32, running_low: bool },
    ChallengeResolved { outcome: ChallengeOutcome },
    LevelComplete { level: u32 },
    /// The penalty was failed on `level`; the game restarts at level 1.
    GameOver { level: u32 },
    GameWon,
}

impl GameEvent {
    /// Short name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::LevelStarted { .. } => "level_started",
            GameEvent::CardRevealed { .. } => "card_revealed",
            GameEvent::Match { .. } => "match",
            GameEvent::Mismatch { .. } => "mismatch",
            GameEvent::PenaltyTriggered { .. } => "penalty_triggered",
            GameEvent::ChallengeTick { .. } => "challenge_tick",
            GameEvent::ChallengeResolved { .. } => "challenge_resolved",
            GameEvent::LevelComplete { .. } => "level_complete",
            GameEvent::GameOver { .. } => "game_over",
            GameEvent::GameWon => "game_won",
        }
    }
}
