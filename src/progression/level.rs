//! Level ordinals, card counts and countdown budgets.

use serde::{Deserialize, Serialize};

use crate::content::ContentFamily;
use crate::core::config::{GameConfig, LevelOverflow, TimerConfig};
use crate::core::ProgressionError;

/// Everything needed to deal one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based ordinal.
    pub ordinal: u32,
    pub card_count: usize,
    /// Penalty countdown budget in seconds.
    pub timer_budget: u32,
    pub family: ContentFamily,
}

impl Level {
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.card_count / 2
    }
}

/// Tracks the current level and answers table lookups.
#[derive(Clone, Debug)]
pub struct LevelProgression {
    card_counts: Vec<usize>,
    overflow: LevelOverflow,
    timer: TimerConfig,
    current: u32,
}

impl LevelProgression {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            card_counts: config.level_card_counts.clone(),
            overflow: config.overflow,
            timer: config.timer,
            current: 1,
        }
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.card_counts.len() as u32
    }

    #[must_use]
    pub fn is_final(&self, level: u32) -> bool {
        level >= self.max_level()
    }

    /// Card count for a level.
    ///
    /// Past the table the last count is reused under `Clamp`; `Reject`
    /// reports `LevelTableExhausted`.
    pub fn card_count(&self, level: u32) -> Result<usize, ProgressionError> {
        if level == 0 {
            return Err(ProgressionError::InvalidLevel(level));
        }
        match self.card_counts.get(level as usize - 1) {
            Some(&count) => Ok(count),
            None => match (self.overflow, self.card_counts.last()) {
                (LevelOverflow::Clamp, Some(&last)) => Ok(last),
                _ => Err(ProgressionError::LevelTableExhausted {
                    level,
                    table_len: self.card_counts.len(),
                }),
            },
        }
    }

    /// Countdown budget: `max(min, base - (level - 1) * step)`.
    ///
    /// The final level keeps the budget of the level before it.
    #[must_use]
    pub fn timer_budget(&self, level: u32) -> u32 {
        let max = self.max_level();
        let effective = if max > 1 && level >= max { max - 1 } else { level.max(1) };
        let reduction = (effective - 1).saturating_mul(self.timer.step_secs);
        self.timer
            .base_secs
            .saturating_sub(reduction)
            .max(self.timer.min_secs)
    }

    /// Describe a level.
    pub fn level(&self, ordinal: u32) -> Result<Level, ProgressionError> {
        Ok(Level {
            ordinal,
            card_count: self.card_count(ordinal)?,
            timer_budget: self.timer_budget(ordinal),
            family: ContentFamily::for_level(ordinal),
        })
    }

    /// Describe the current level.
    pub fn current_level(&self) -> Result<Level, ProgressionError> {
        self.level(self.current)
    }

    /// Move to the next level. Fails at the final level.
    pub fn advance(&mut self) -> Result<u32, ProgressionError> {
        if self.is_final(self.current) {
            return Err(ProgressionError::FinalLevel(self.current));
        }
        self.current += 1;
        Ok(self.current)
    }

    /// Back to level 1.
    pub fn reset(&mut self) {
        self.current = 1;
    }
}
