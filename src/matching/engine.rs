//! Per-round selection and match detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, CardFace, CardId, RevealError};

/// Where the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No card face up.
    Idle,
    /// One card face up.
    OneRevealed,
    /// Two cards face up, waiting for `resolve()`.
    Resolving,
    /// Miss threshold reached; paused until `clear_penalty()`.
    PenaltyPending,
}

/// Outcome of comparing the two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Keys matched; both cards are removed.
    Match {
        first: CardId,
        second: CardId,
        level_complete: bool,
    },
    /// Keys differed; both cards are face down again.
    Mismatch {
        first: CardId,
        second: CardId,
        misses: u32,
    },
    /// Keys differed and the miss threshold was reached.
    PenaltyTriggered { first: CardId, second: CardId },
}

/// Owns the cards of one level and the reveal/resolve cycle.
///
/// ## Invariants
///
/// - At most two cards are in the selection.
/// - A third reveal is rejected while two are pending.
/// - `misses` resets on a match and when a penalty is triggered.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchEngine {
    cards: Vec<Card>,
    selection: SmallVec<[CardId; 2]>,
    misses: u32,
    miss_threshold: u32,
    penalty_pending: bool,
}

impl MatchEngine {
    /// Create an engine over freshly dealt cards.
    pub fn new(cards: Vec<Card>, miss_threshold: u32) -> Self {
        Self {
            cards,
            selection: SmallVec::new(),
            misses: 0,
            miss_threshold: miss_threshold.max(1),
            penalty_pending: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.penalty_pending {
            return MatchPhase::PenaltyPending;
        }
        match self.selection.len() {
            0 => MatchPhase::Idle,
            1 => MatchPhase::OneRevealed,
            _ => MatchPhase::Resolving,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Currently revealed, unresolved cards in reveal order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Consecutive misses since the last match or penalty.
    #[must_use]
    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Cards not yet matched.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.iter().filter(|c| c.is_active()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.removed)
    }

    /// Turn a card face up.
    ///
    /// Returns the new phase. Rejected (with no state change) for unknown,
    /// removed or already revealed cards, while two cards await resolution,
    /// and while a penalty is pending.
    pub fn reveal(&mut self, id: CardId) -> Result<MatchPhase, RevealError> {
        if self.penalty_pending {
            return Err(RevealError::PenaltyPending);
        }
        if self.selection.len() >= 2 {
            return Err(RevealError::ResolutionPending);
        }

        let card = self
            .cards
            .get_mut(id.index())
            .ok_or(RevealError::UnknownCard(id))?;
        if card.removed {
            return Err(RevealError::AlreadyRemoved(id));
        }
        if card.is_revealed() {
            return Err(RevealError::AlreadyRevealed(id));
        }

        card.face = CardFace::Revealed;
        self.selection.push(id);
        Ok(self.phase())
    }

    /// Compare the two revealed cards.
    ///
    /// Returns `None` unless the engine is in `Resolving`.
    pub fn resolve(&mut self) -> Option<Resolution> {
        if self.phase() != MatchPhase::Resolving {
            return None;
        }

        let first = self.selection[0];
        let second = self.selection[1];
        self.selection.clear();

        let matched = self.cards[first.index()].pairs_with(&self.cards[second.index()]);

        if matched {
            for id in [first, second] {
                let card = &mut self.cards[id.index()];
                card.removed = true;
                card.face = CardFace::Hidden;
            }
            self.misses = 0;
            return Some(Resolution::Match {
                first,
                second,
                level_complete: self.is_complete(),
            });
        }

        for id in [first, second] {
            self.cards[id.index()].face = CardFace::Hidden;
        }
        self.misses += 1;

        if self.misses >= self.miss_threshold {
            self.misses = 0;
            self.penalty_pending = true;
            Some(Resolution::PenaltyTriggered { first, second })
        } else {
            Some(Resolution::Mismatch {
                first,
                second,
                misses: self.misses,
            })
        }
    }

    /// Resume play after a passed penalty challenge.
    pub fn clear_penalty(&mut self) {
        self.penalty_pending = false;
    }
}
