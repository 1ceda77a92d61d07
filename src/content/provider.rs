//! Per-level pair generation.

use serde::{Deserialize, Serialize};

use crate::core::config::ImageConfig;
use crate::core::{GameRng, PairKey};

use super::kind::{CardContent, ContentPair};
use super::library::{cyclic, ANIMALS, COLORS, COUNTRIES, EMOJIS, ICONS, SOUNDS};

/// Content theme of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentFamily {
    Numbers,
    Images,
    Emoji,
    Colors,
    /// Problem card pairs with its solution.
    MathProblems,
    /// Animal pairs with the sound it makes.
    AnimalSounds,
    /// Flag pairs with the country name.
    Flags,
    /// Icon pairs with a character.
    Characters,
    /// Audio clip pairs with its label.
    SoundClips,
    /// Images with an index offset, for every level past the themed ones.
    FallbackImages,
}

impl ContentFamily {
    /// Family used by a level ordinal.
    #[must_use]
    pub fn for_level(level: u32) -> Self {
        match level {
            1 => ContentFamily::Numbers,
            2 => ContentFamily::Images,
            3 => ContentFamily::Emoji,
            4 => ContentFamily::Colors,
            5 => ContentFamily::MathProblems,
            6 => ContentFamily::AnimalSounds,
            7 => ContentFamily::Flags,
            8 => ContentFamily::Characters,
            9 => ContentFamily::SoundClips,
            _ => ContentFamily::FallbackImages,
        }
    }

    /// Whether both cards of a pair show the same content.
    #[must_use]
    pub fn is_homogeneous(self) -> bool {
        matches!(
            self,
            ContentFamily::Numbers
                | ContentFamily::Images
                | ContentFamily::Emoji
                | ContentFamily::Colors
                | ContentFamily::FallbackImages
        )
    }
}

/// Source of card pairs for a level.
///
/// Implementations must return exactly `total_pairs` pairs with distinct keys.
pub trait ContentProvider {
    fn generate(&self, level: u32, total_pairs: usize, rng: &mut GameRng) -> Vec<ContentPair>;
}

/// The themed families of the classic game.
#[derive(Clone, Debug, Default)]
pub struct StandardContent {
    images: ImageConfig,
}

impl StandardContent {
    pub fn new(images: ImageConfig) -> Self {
        Self { images }
    }

    fn image(&self, index: u32) -> CardContent {
        CardContent::Image {
            url: format!("{}{}", self.images.url_prefix, index),
        }
    }
}

impl ContentProvider for StandardContent {
    fn generate(&self, level: u32, total_pairs: usize, rng: &mut GameRng) -> Vec<ContentPair> {
        let family = ContentFamily::for_level(level);

        (0..total_pairs)
            .map(|i| {
                let key = PairKey::new(i as u32);
                match family {
                    ContentFamily::Numbers => ContentPair::twin(key, CardContent::Number(i as u32)),
                    ContentFamily::Images => ContentPair::twin(key, self.image(i as u32)),
                    ContentFamily::Emoji => ContentPair::twin(
                        key,
                        CardContent::Emoji(cyclic(&EMOJIS, i).to_string()),
                    ),
                    ContentFamily::Colors => ContentPair::twin(
                        key,
                        CardContent::Color(cyclic(&COLORS, i).to_string()),
                    ),
                    ContentFamily::MathProblems => {
                        let a = rng.gen_range_inclusive(1, 10);
                        let b = rng.gen_range_inclusive(1, 10);
                        ContentPair::new(
                            key,
                            CardContent::Text(format!("{a} + {b}")),
                            CardContent::Number(a + b),
                        )
                    }
                    ContentFamily::AnimalSounds => {
                        let (animal, sound) = cyclic(&ANIMALS, i);
                        ContentPair::new(
                            key,
                            CardContent::Emoji(animal.to_string()),
                            CardContent::Text(sound.to_string()),
                        )
                    }
                    ContentFamily::Flags => {
                        let (flag, name) = cyclic(&COUNTRIES, i);
                        ContentPair::new(
                            key,
                            CardContent::Emoji(flag.to_string()),
                            CardContent::Text(name.to_string()),
                        )
                    }
                    ContentFamily::Characters => {
                        let (icon, character) = cyclic(&ICONS, i);
                        ContentPair::new(
                            key,
                            CardContent::Emoji(icon.to_string()),
                            CardContent::Text(character.to_string()),
                        )
                    }
                    ContentFamily::SoundClips => {
                        let (clip, label) = cyclic(&SOUNDS, i);
                        ContentPair::new(
                            key,
                            CardContent::Audio {
                                clip: clip.to_string(),
                            },
                            CardContent::Text(label.to_string()),
                        )
                    }
                    ContentFamily::FallbackImages => {
                        ContentPair::twin(key, self.image(i as u32 + self.images.fallback_offset))
                    }
                }
            })
            .collect()
    }
}
