//! Presentation seam.
//!
//! The controller tells a `Renderer` what changed; it never reads anything
//! back. Effects are fire-and-forget triggers the host maps to animation
//! and sound.

use serde::{Deserialize, Serialize};

use crate::board::BoardLayout;
use crate::core::Card;
use crate::penalty::Challenge;

pub const WIN_TEXT: &str = "Congratulations, you are the memory king!";
pub const GAME_OVER_TEXT: &str = "Game Over! Try Again.";

/// Presentation triggers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    StartGame,
    /// Cards pop in one after another when a board is dealt.
    DominoAppear,
    CardFlip,
    LevelUp,
    /// Banner announcing the level about to start.
    LevelBanner { level: u32, text: String },
    QuestionTime,
    GameOver { text: String },
    /// Cards fly across the screen after the final level.
    WinScatter { text: String },
}

impl Effect {
    #[must_use]
    pub fn level_banner(level: u32) -> Self {
        Effect::LevelBanner {
            level,
            text: format!("Welcome to Level {level}!"),
        }
    }

    #[must_use]
    pub fn game_over() -> Self {
        Effect::GameOver {
            text: GAME_OVER_TEXT.to_string(),
        }
    }

    #[must_use]
    pub fn win_scatter() -> Self {
        Effect::WinScatter {
            text: WIN_TEXT.to_string(),
        }
    }
}

/// Drawing surface driven by the controller.
pub trait Renderer {
    /// Draw a freshly dealt card face down.
    fn render_card(&mut self, card: &Card);

    fn mark_revealed(&mut self, card: &Card);

    fn mark_removed(&mut self, card: &Card);

    fn apply_layout(&mut self, layout: &BoardLayout);

    fn play_effect(&mut self, effect: &Effect);

    /// Turn a card back face down after a miss.
    fn mark_hidden(&mut self, _card: &Card) {}

    /// Drop every card before a new board is dealt.
    fn clear_board(&mut self) {}

    fn show_challenge(&mut self, _challenge: &Challenge) {}

    fn update_countdown(&mut self, _remaining_secs: u32, _running_low: bool) {}

    fn hide_challenge(&mut self) {}
}

/// Renderer that draws nothing. For headless play and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_card(&mut self, _card: &Card) {}
    fn mark_revealed(&mut self, _card: &Card) {}
    fn mark_removed(&mut self, _card: &Card) {}
    fn apply_layout(&mut self, _layout: &BoardLayout) {}
    fn play_effect(&mut self, _effect: &Effect) {}
}
