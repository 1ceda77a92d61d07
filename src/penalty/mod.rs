//! Penalty challenge: a timed multiple-choice sum.
//!
//! Wrong answers, invalid input and timeouts all fail the challenge.

pub mod challenge;

pub use challenge::{Challenge, ChallengeId, ChallengeOutcome, Countdown, PenaltyChallenge};
