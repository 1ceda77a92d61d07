//! Headless autoplay.
//!
//! Plays a full game with a scripted player that knows every pair key.
//! Every few pairs it deliberately misses twice to exercise the penalty
//! question, which it answers correctly.
//!
//! Usage: `autoplay [seed]`. Set `RUST_LOG=pair_recall=debug` for detail.

use std::time::Duration;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use pair_recall::{
    BoardLayout, Card, CardId, Effect, GameConfig, GameController, GameError, GameEvent,
    GamePhase, Renderer,
};

/// Renderer that logs effects and layouts.
#[derive(Default)]
struct LogRenderer {
    flips: u64,
}

impl Renderer for LogRenderer {
    fn render_card(&mut self, _card: &Card) {}

    fn mark_revealed(&mut self, _card: &Card) {
        self.flips += 1;
    }

    fn mark_removed(&mut self, _card: &Card) {}

    fn apply_layout(&mut self, layout: &BoardLayout) {
        info!(
            columns = layout.columns,
            rows = layout.rows,
            width = layout.card_width,
            "board laid out"
        );
    }

    fn play_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::LevelBanner { text, .. }
            | Effect::GameOver { text }
            | Effect::WinScatter { text } => info!("{text}"),
            _ => {}
        }
    }
}

/// Two unmatched cards, if the board still has them.
fn mismatched_pair(ctl: &GameController<LogRenderer>) -> Option<(CardId, CardId)> {
    let cards = ctl.session()?.engine.cards();
    let first = cards.iter().find(|c| c.is_active())?;
    let second = cards
        .iter()
        .find(|c| c.is_active() && c.key != first.key)?;
    Some((first.id, second.id))
}

/// Two cards that match.
fn matching_pair(ctl: &GameController<LogRenderer>) -> Option<(CardId, CardId)> {
    let cards = ctl.session()?.engine.cards();
    let first = cards.iter().find(|c| c.is_active())?;
    let second = cards
        .iter()
        .find(|c| c.is_active() && first.pairs_with(c))?;
    Some((first.id, second.id))
}

fn flip(
    ctl: &mut GameController<LogRenderer>,
    (a, b): (CardId, CardId),
    delay: Duration,
) -> Result<(), GameError> {
    let board = ctl.session_id().ok_or(GameError::NotStarted)?;
    ctl.on_card_activated(board, a)?;
    ctl.on_card_activated(board, b)?;
    ctl.advance_time(delay)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };

    let config = GameConfig::default();
    let reveal_delay = Duration::from_millis(config.timings.reveal_delay_ms);
    let announcement = Duration::from_millis(config.timings.announcement_ms);

    let mut ctl = GameController::new(config, LogRenderer::default(), seed)?;
    ctl.start_game()?;
    info!(seed, "autoplay started");

    let mut pairs_cleared = 0u32;
    let mut penalties = 0u32;
    let mut last_miss_at = None;

    while ctl.phase() != GamePhase::GameWon {
        match ctl.phase() {
            GamePhase::LevelActive => {
                // Miss twice every fourth pair, when the board allows it.
                if pairs_cleared % 4 == 3 && last_miss_at != Some(pairs_cleared) {
                    last_miss_at = Some(pairs_cleared);
                    for _ in 0..ctl.config().miss_threshold {
                        if ctl.phase() != GamePhase::LevelActive {
                            break;
                        }
                        if let Some(pair) = mismatched_pair(&ctl) {
                            flip(&mut ctl, pair, reveal_delay)?;
                        }
                    }
                }
                if ctl.phase() == GamePhase::LevelActive {
                    match matching_pair(&ctl) {
                        Some(pair) => {
                            flip(&mut ctl, pair, reveal_delay)?;
                            pairs_cleared += 1;
                        }
                        None => {
                            warn!(level = ctl.level(), "no pair left on an active board");
                            break;
                        }
                    }
                }
            }
            GamePhase::PenaltyActive => {
                let answer = ctl.challenge().map(|c| c.answer());
                if let Some(answer) = answer {
                    penalties += 1;
                    let outcome = ctl.on_answer_chosen(answer)?;
                    info!(?outcome, "penalty answered");
                }
            }
            GamePhase::LevelTransition => ctl.advance_time(announcement)?,
            GamePhase::AwaitingStart => ctl.start_game()?,
            GamePhase::GameWon => {}
        }

        for event in ctl.take_events() {
            match event {
                GameEvent::LevelStarted { level, card_count } => {
                    info!(level, card_count, "level started");
                }
                other => debug!(event = other.name(), "game event"),
            }
        }
    }

    info!(
        pairs_cleared,
        penalties,
        flips = ctl.renderer().flips,
        elapsed_ms = ctl.now().as_millis() as u64,
        "autoplay finished"
    );
    Ok(())
}
