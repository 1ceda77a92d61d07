//! The per-level aggregate.

use serde::{Deserialize, Serialize};

use crate::board::{deal, BoardLayout};
use crate::content::ContentProvider;
use crate::core::{GameConfig, GameRng};
use crate::matching::MatchEngine;
use crate::penalty::PenaltyChallenge;
use crate::progression::Level;

/// Identity of one dealt board. Scheduled tasks carry it so callbacks from
/// a torn-down board can be recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// One level's worth of state: the board, the round, and any open penalty.
///
/// Replaced wholesale on every level change and game over.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub id: SessionId,
    pub level: Level,
    pub layout: BoardLayout,
    pub engine: MatchEngine,
    pub penalty: PenaltyChallenge,
}

impl GameSession {
    /// Generate, shuffle and lay out the cards for `level`.
    pub fn build(
        id: SessionId,
        level: Level,
        config: &GameConfig,
        provider: &dyn ContentProvider,
        content_rng: &mut GameRng,
        deal_rng: &mut GameRng,
    ) -> Self {
        let pairs = provider.generate(level.ordinal, level.pair_count(), content_rng);
        let cards = deal(pairs, deal_rng);
        let layout = BoardLayout::compute(cards.len(), &config.layout);

        Self {
            id,
            level,
            layout,
            engine: MatchEngine::new(cards, config.miss_threshold),
            penalty: PenaltyChallenge::new(config.challenge),
        }
    }
}
