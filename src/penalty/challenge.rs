//! Timed arithmetic question shown after too many misses.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::ChallengeConfig;
use crate::core::{ChallengeError, GameRng};

/// Identity of one penalty episode. Increments with every `start()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChallengeId(pub u64);

/// How a challenge ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeOutcome {
    Passed,
    Failed,
    TimedOut,
}

impl ChallengeOutcome {
    #[must_use]
    pub fn is_pass(self) -> bool {
        self == ChallengeOutcome::Passed
    }
}

/// Result of one countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    /// Seconds left after this tick.
    Running(u32),
    /// The countdown hit zero; the challenge has ended.
    Expired,
}

/// An open question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub left: u32,
    pub right: u32,
    /// Answer choices in display order. Exactly one slot holds the answer;
    /// distractors are always above it and may repeat each other.
    pub options: SmallVec<[u32; 4]>,
    pub remaining_secs: u32,
    low_time_secs: u32,
}

impl Challenge {
    #[must_use]
    pub fn answer(&self) -> u32 {
        self.left + self.right
    }

    /// Prompt text, e.g. `"What is 3 + 4?"`.
    #[must_use]
    pub fn question(&self) -> String {
        format!("What is {} + {}?", self.left, self.right)
    }

    #[must_use]
    pub fn is_running_low(&self) -> bool {
        self.remaining_secs <= self.low_time_secs
    }
}

/// Owns at most one active challenge.
#[derive(Clone, Debug)]
pub struct PenaltyChallenge {
    config: ChallengeConfig,
    active: Option<Challenge>,
    next_id: u64,
}

impl PenaltyChallenge {
    pub fn new(config: ChallengeConfig) -> Self {
        Self {
            config,
            active: None,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&Challenge> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Open a new challenge with `budget_secs` on the clock.
    ///
    /// Replaces any challenge already open; its id is retired, so ticks
    /// scheduled for it no longer apply.
    pub fn start(&mut self, budget_secs: u32, rng: &mut GameRng) -> &Challenge {
        let c = &self.config;
        let left = rng.gen_range_inclusive(c.operand_min, c.operand_max);
        let right = rng.gen_range_inclusive(c.operand_min, c.operand_max);
        let answer = left + right;

        let correct_slot = rng.gen_index(c.option_count);
        let options = (0..c.option_count)
            .map(|slot| {
                if slot == correct_slot {
                    answer
                } else {
                    answer + rng.gen_range_inclusive(1, c.max_distractor_offset)
                }
            })
            .collect();

        self.next_id += 1;
        let challenge = Challenge {
            id: ChallengeId(self.next_id),
            left,
            right,
            options,
            remaining_secs: budget_secs,
            low_time_secs: c.low_time_secs,
        };
        tracing::debug!(
            challenge = challenge.id.0,
            question = %challenge.question(),
            budget_secs,
            "penalty challenge started"
        );
        self.active.insert(challenge)
    }

    /// Count down one second.
    ///
    /// Returns `None` when no challenge is open.
    pub fn tick(&mut self) -> Option<Countdown> {
        let challenge = self.active.as_mut()?;
        challenge.remaining_secs = challenge.remaining_secs.saturating_sub(1);
        if challenge.remaining_secs == 0 {
            self.active = None;
            return Some(Countdown::Expired);
        }
        Some(Countdown::Running(challenge.remaining_secs))
    }

    /// Answer with a number. Ends the challenge.
    ///
    /// A value that is not among the options is `InvalidAnswer`.
    pub fn submit_answer(&mut self, value: u32) -> Result<ChallengeOutcome, ChallengeError> {
        let challenge = self.active.take().ok_or(ChallengeError::NoActiveChallenge)?;

        if value == challenge.answer() {
            Ok(ChallengeOutcome::Passed)
        } else if challenge.options.contains(&value) {
            Ok(ChallengeOutcome::Failed)
        } else {
            Err(ChallengeError::InvalidAnswer(value.to_string()))
        }
    }

    /// Answer with raw input text. Ends the challenge.
    pub fn submit_input(&mut self, input: &str) -> Result<ChallengeOutcome, ChallengeError> {
        if self.active.is_none() {
            return Err(ChallengeError::NoActiveChallenge);
        }
        match input.trim().parse::<u32>() {
            Ok(value) => self.submit_answer(value),
            Err(_) => {
                self.active = None;
                Err(ChallengeError::InvalidAnswer(input.to_string()))
            }
        }
    }

    /// Drop the open challenge without an outcome.
    pub fn cancel(&mut self) -> Option<Challenge> {
        self.active.take()
    }
}
