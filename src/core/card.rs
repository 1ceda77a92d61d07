//! Cards on the board.
//!
//! A `Card` sits at a fixed position on the board (`CardId`) and carries a
//! `PairKey`. Two cards with equal keys form a pair, regardless of what is
//! printed on their faces: a math problem and its solution share a key even
//! though they display different content.

use serde::{Deserialize, Serialize};

use crate::content::CardContent;

/// Board position of a card within one level.
///
/// IDs are dense: a level with `n` cards uses `0..n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Matching identity shared by exactly two cards per level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey(pub u32);

impl PairKey {
    /// Create a new pair key.
    #[must_use]
    pub const fn new(key: u32) -> Self {
        Self(key)
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Which side of the card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    #[default]
    Hidden,
    Revealed,
}

/// A card instance on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Board position.
    pub id: CardId,

    /// Matching identity.
    pub key: PairKey,

    /// What the face shows when revealed.
    pub content: CardContent,

    /// Current face.
    pub face: CardFace,

    /// Matched and cleared from play.
    pub removed: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, key: PairKey, content: CardContent) -> Self {
        Self {
            id,
            key,
            content,
            face: CardFace::Hidden,
            removed: false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.face == CardFace::Revealed
    }

    /// Still in play (not yet matched).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.removed
    }

    /// Check whether two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.key == other.key
    }
}
