//! Game configuration.
//!
//! Hosts configure the engine once at startup:
//! - `level_card_counts`: how many cards each level deals
//! - `TimerConfig`: penalty countdown budget per level
//! - `Timings`: UI pauses owned by the scheduler
//! - `LayoutConfig`: board sizing
//! - `ChallengeConfig`: penalty question shape
//! - `ImageConfig`: where image cards point
//!
//! Every field has a default matching the classic 15-level game, so
//! `GameConfig::default()` is a complete configuration and a JSON document
//! only needs the fields it overrides.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default per-level card counts for the classic 15-level game.
pub const DEFAULT_LEVEL_CARD_COUNTS: [usize; 15] =
    [8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 52, 56, 60, 64];

/// What to do with a level ordinal past the end of the card-count table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelOverflow {
    /// Use the last defined card count.
    #[default]
    Clamp,
    /// Report `LevelTableExhausted`.
    Reject,
}

/// Penalty countdown budget: `max(min_secs, base_secs - (level - 1) * step_secs)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub base_secs: u32,
    pub min_secs: u32,
    pub step_secs: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            base_secs: 20,
            min_secs: 10,
            step_secs: 1,
        }
    }
}

/// Scheduler delays, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Pause between the second reveal and the comparison.
    pub reveal_delay_ms: u64,
    /// Penalty countdown tick.
    pub tick_interval_ms: u64,
    /// How long the level banner shows before the next board is dealt.
    pub announcement_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 600,
            tick_interval_ms: 1000,
            announcement_ms: 2500,
        }
    }
}

/// Board sizing, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Upper bound on card width.
    pub max_card_width: f32,
    /// Width shared between columns.
    pub board_width: f32,
    /// Height divided by width.
    pub aspect_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_card_width: 120.0,
            board_width: 600.0,
            aspect_ratio: 1.5,
        }
    }
}

/// Penalty question shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeConfig {
    /// Smallest operand (inclusive).
    pub operand_min: u32,
    /// Largest operand (inclusive).
    pub operand_max: u32,
    /// Number of answer options, one of which is correct.
    pub option_count: usize,
    /// Distractors are `answer + 1..=max_distractor_offset`.
    pub max_distractor_offset: u32,
    /// Remaining seconds at which the countdown counts as running low.
    pub low_time_secs: u32,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            operand_min: 1,
            operand_max: 10,
            option_count: 3,
            max_distractor_offset: 3,
            low_time_secs: 5,
        }
    }
}

/// Image card sources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Prefix the image index is appended to.
    pub url_prefix: String,
    /// Index offset used by the fallback family past the themed levels.
    pub fallback_offset: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            url_prefix: "https://picsum.photos/200?random=".to_string(),
            fallback_offset: 20,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt per level; its length is the number of levels.
    pub level_card_counts: Vec<usize>,

    /// Handling of levels past the table.
    pub overflow: LevelOverflow,

    /// Consecutive misses that open a penalty challenge.
    pub miss_threshold: u32,

    pub timer: TimerConfig,
    pub timings: Timings,
    pub layout: LayoutConfig,
    pub challenge: ChallengeConfig,
    pub images: ImageConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level_card_counts: DEFAULT_LEVEL_CARD_COUNTS.to_vec(),
            overflow: LevelOverflow::default(),
            miss_threshold: 2,
            timer: TimerConfig::default(),
            timings: Timings::default(),
            layout: LayoutConfig::default(),
            challenge: ChallengeConfig::default(),
            images: ImageConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create the classic configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the level table.
    #[must_use]
    pub fn with_level_card_counts(mut self, counts: impl Into<Vec<usize>>) -> Self {
        self.level_card_counts = counts.into();
        self
    }

    #[must_use]
    pub fn with_overflow(mut self, overflow: LevelOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    #[must_use]
    pub fn with_miss_threshold(mut self, threshold: u32) -> Self {
        self.miss_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_timer(mut self, timer: TimerConfig) -> Self {
        self.timer = timer;
        self
    }

    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_challenge(mut self, challenge: ChallengeConfig) -> Self {
        self.challenge = challenge;
        self
    }

    /// Number of levels in the game.
    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.level_card_counts.len() as u32
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_card_counts.is_empty() {
            return Err(ConfigError::EmptyLevelTable);
        }
        for (i, &count) in self.level_card_counts.iter().enumerate() {
            if count == 0 || count % 2 != 0 {
                return Err(ConfigError::OddCardCount {
                    level: i as u32 + 1,
                    count,
                });
            }
        }

        if self.timer.min_secs == 0 {
            return Err(ConfigError::InvalidTimer("min_secs must be non-zero"));
        }
        if self.timer.base_secs < self.timer.min_secs {
            return Err(ConfigError::InvalidTimer("base_secs is below min_secs"));
        }
        if self.timings.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTimer("tick_interval_ms must be non-zero"));
        }

        if self.miss_threshold == 0 {
            return Err(ConfigError::ZeroMissThreshold);
        }

        let c = &self.challenge;
        if c.operand_min > c.operand_max {
            return Err(ConfigError::InvalidChallenge("operand_min exceeds operand_max"));
        }
        if c.option_count == 0 {
            return Err(ConfigError::InvalidChallenge("option_count must be non-zero"));
        }
        if c.max_distractor_offset == 0 {
            return Err(ConfigError::InvalidChallenge("max_distractor_offset must be non-zero"));
        }
        // Largest option shown is 2 * operand_max + max_distractor_offset.
        let largest_option = c
            .operand_max
            .checked_mul(2)
            .and_then(|sum| sum.checked_add(c.max_distractor_offset));
        if largest_option.is_none() {
            return Err(ConfigError::InvalidChallenge("operand range overflows answer options"));
        }

        let l = &self.layout;
        if !(l.max_card_width > 0.0 && l.board_width > 0.0 && l.aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidLayout("dimensions must be positive"));
        }

        Ok(())
    }
}
