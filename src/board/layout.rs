//! Grid dimensions and card sizing.

use serde::{Deserialize, Serialize};

use crate::core::config::LayoutConfig;

/// Grid shape and card size for one level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub columns: u32,
    pub rows: u32,
    pub card_width: f32,
    pub card_height: f32,
}

impl BoardLayout {
    /// Compute a near-square grid for `card_count` cards.
    ///
    /// Columns start at the ceiling square root, rows at whatever is needed to
    /// hold every card, and both are rounded up to even numbers so the board
    /// is symmetric. Cards shrink as columns grow, never exceeding
    /// `max_card_width`, and keep the configured aspect ratio.
    #[must_use]
    pub fn compute(card_count: usize, config: &LayoutConfig) -> Self {
        let count = card_count.max(1) as u32;

        let mut columns = ceil_sqrt(count);
        columns = round_up_even(columns);

        let mut rows = count.div_ceil(columns);
        rows = round_up_even(rows);

        let card_width = config.max_card_width.min(config.board_width / columns as f32);
        let card_height = card_width * config.aspect_ratio;

        Self {
            columns,
            rows,
            card_width,
            card_height,
        }
    }

    /// Total grid slots.
    #[must_use]
    pub fn slots(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Invisible filler slots needed after `card_count` cards to complete the grid.
    #[must_use]
    pub fn placeholders(&self, card_count: usize) -> usize {
        self.slots().saturating_sub(card_count)
    }
}

fn ceil_sqrt(n: u32) -> u32 {
    let mut root = (n as f64).sqrt() as u32;
    while root * root < n {
        root += 1;
    }
    root.max(1)
}

fn round_up_even(n: u32) -> u32 {
    if n % 2 == 0 {
        n.max(2)
    } else {
        n + 1
    }
}
