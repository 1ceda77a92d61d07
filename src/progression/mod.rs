//! Level progression: card-count table, countdown budgets, advance and reset.

pub mod level;

pub use level::{Level, LevelProgression};
