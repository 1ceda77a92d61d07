//! Card face content.
//!
//! Content is tagged once at generation time. Renderers match on the variant
//! instead of sniffing the payload for URL, color or sound prefixes.

use serde::{Deserialize, Serialize};

use crate::core::PairKey;

/// What a card shows when face up.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CardContent {
    /// A plain number.
    Number(u32),
    /// A remote image.
    Image { url: String },
    /// A single emoji glyph (animals, flags, icons).
    Emoji(String),
    /// A solid color as `#RRGGBB`.
    Color(String),
    /// Free text (problems, names, labels).
    Text(String),
    /// An audio clip the card plays when revealed.
    Audio { clip: String },
}

impl CardContent {
    /// Short text form, for logs and text-only renderers.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            CardContent::Number(n) => n.to_string(),
            CardContent::Image { url } => url.clone(),
            CardContent::Emoji(s) | CardContent::Color(s) | CardContent::Text(s) => s.clone(),
            CardContent::Audio { clip } => format!("sound:{clip}"),
        }
    }
}

impl std::fmt::Display for CardContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Two faces sharing one pair key.
///
/// Homogeneous families put the same content on both sides; heterogeneous
/// families (problem/solution, flag/name) do not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPair {
    pub key: PairKey,
    pub first: CardContent,
    pub second: CardContent,
}

impl ContentPair {
    /// Pair with different content on each side.
    #[must_use]
    pub fn new(key: PairKey, first: CardContent, second: CardContent) -> Self {
        Self { key, first, second }
    }

    /// Pair with the same content on both sides.
    #[must_use]
    pub fn twin(key: PairKey, content: CardContent) -> Self {
        Self {
            key,
            first: content.clone(),
            second: content,
        }
    }

    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        self.first == self.second
    }
}
