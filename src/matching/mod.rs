//! Match detection.
//!
//! `MatchEngine` runs the reveal/resolve cycle for one level:
//! `Idle -> OneRevealed -> Resolving -> Idle`, or into `PenaltyPending`
//! once consecutive misses reach the threshold. The pause between the second
//! reveal and `resolve()` belongs to the caller.

pub mod engine;

pub use engine::{MatchEngine, MatchPhase, Resolution};
