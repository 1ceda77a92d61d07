//! Top-level game state machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::content::{ContentProvider, StandardContent};
use crate::core::{
    CardId, ChallengeError, ConfigError, GameConfig, GameError, GameRng, RevealError,
};
use crate::matching::{MatchPhase, Resolution};
use crate::penalty::{Challenge, ChallengeId, ChallengeOutcome, Countdown};
use crate::progression::LevelProgression;

use super::events::GameEvent;
use super::render::{Effect, Renderer};
use super::scheduler::{ScheduledTask, Scheduler, TaskKind};
use super::session::{GameSession, SessionId};

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing dealt yet.
    AwaitingStart,
    /// Board accepts card clicks.
    LevelActive,
    /// Board paused behind a penalty question.
    PenaltyActive,
    /// Level banner showing; next board not dealt yet.
    LevelTransition,
    /// Final level cleared. Terminal until `start_game()`.
    GameWon,
}

/// Drives a whole game.
///
/// Single-threaded: the host calls the input methods from its event loop
/// and advances the clock with `advance_time()`. All delayed work runs from
/// there, after checking that the board it was scheduled for is still the
/// current one.
pub struct GameController<R: Renderer> {
    config: GameConfig,
    renderer: R,
    provider: Box<dyn ContentProvider>,
    progression: LevelProgression,
    scheduler: Scheduler,
    session: Option<GameSession>,
    phase: GamePhase,
    next_session: u64,
    content_rng: GameRng,
    deal_rng: GameRng,
    challenge_rng: GameRng,
    events: Vec<GameEvent>,
}

impl<R: Renderer> GameController<R> {
    /// Create a controller. Nothing is dealt until `start_game()`.
    pub fn new(config: GameConfig, renderer: R, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::new(seed);

        Ok(Self {
            provider: Box::new(StandardContent::new(config.images.clone())),
            progression: LevelProgression::new(&config),
            scheduler: Scheduler::new(),
            session: None,
            phase: GamePhase::AwaitingStart,
            next_session: 0,
            content_rng: rng.for_context("content"),
            deal_rng: rng.for_context("shuffle"),
            challenge_rng: rng.for_context("challenge"),
            events: Vec::new(),
            renderer,
            config,
        })
    }

    /// Replace the content source.
    #[must_use]
    pub fn with_provider(mut self, provider: impl ContentProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Identity of the board currently dealt. Card clicks must carry it.
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// Current level ordinal.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.progression.current()
    }

    /// Countdown budget for the current level.
    #[must_use]
    pub fn timer_budget(&self) -> u32 {
        self.progression.timer_budget(self.progression.current())
    }

    #[must_use]
    pub fn challenge(&self) -> Option<&Challenge> {
        self.session.as_ref().and_then(|s| s.penalty.active())
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.scheduler.now_ms())
    }

    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Drain queued events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Host input ===

    /// Start (or restart) at level 1.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.scheduler.cancel_all();
        if let Some(session) = self.session.as_mut() {
            if session.penalty.cancel().is_some() {
                self.renderer.hide_challenge();
            }
        }
        self.progression.reset();
        self.renderer.play_effect(&Effect::StartGame);
        info!("game started");
        self.deal_current_level()
    }

    /// A card on board `board` was clicked.
    ///
    /// Rejected clicks return an error and change nothing; hosts can ignore them.
    /// A click for a board that has been torn down is `StaleInput`.
    pub fn on_card_activated(
        &mut self,
        board: SessionId,
        card: CardId,
    ) -> Result<(), GameError> {
        self.ensure_board_input()?;
        let session = self.session.as_mut().ok_or(GameError::NotStarted)?;
        if session.id != board {
            trace!(%board, current = %session.id, %card, "dropped stale click");
            return Err(GameError::StaleInput {
                session: board.0,
                current: session.id.0,
            });
        }

        let phase = match session.engine.reveal(card) {
            Ok(phase) => phase,
            Err(err) => {
                trace!(%card, %err, "reveal rejected");
                return Err(err.into());
            }
        };

        if let Some(revealed) = session.engine.card(card) {
            self.renderer.mark_revealed(revealed);
        }
        self.renderer.play_effect(&Effect::CardFlip);
        self.events.push(GameEvent::CardRevealed { card });

        if phase == MatchPhase::Resolving {
            self.scheduler.schedule(
                self.config.timings.reveal_delay_ms,
                session.id,
                TaskKind::Resolve,
            );
        }
        Ok(())
    }

    /// An answer button was clicked.
    pub fn on_answer_chosen(&mut self, value: u32) -> Result<ChallengeOutcome, GameError> {
        let session = self.penalty_session()?;
        let result = session.penalty.submit_answer(value);
        self.finish_challenge(result)
    }

    /// Free-form answer text. Anything that is not one of the options fails.
    pub fn on_answer_input(&mut self, input: &str) -> Result<ChallengeOutcome, GameError> {
        let session = self.penalty_session()?;
        let result = session.penalty.submit_input(input);
        self.finish_challenge(result)
    }

    /// Advance the clock and run every task that falls due.
    pub fn advance_time(&mut self, elapsed: Duration) -> Result<(), GameError> {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let target = self.scheduler.now_ms().saturating_add(elapsed_ms);

        while let Some(task) = self.scheduler.pop_due(target) {
            match self.run_task(task) {
                Err(GameError::StaleCallback { task, session }) => {
                    trace!(task, session, "dropped stale task");
                }
                other => other?,
            }
        }

        self.scheduler.set_now(target);
        Ok(())
    }

    // === Transitions ===

    fn ensure_board_input(&self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::LevelActive => Ok(()),
            GamePhase::AwaitingStart => Err(GameError::NotStarted),
            GamePhase::GameWon => Err(GameError::GameFinished),
            GamePhase::PenaltyActive => Err(RevealError::PenaltyPending.into()),
            GamePhase::LevelTransition => Err(RevealError::InputLocked.into()),
        }
    }

    fn penalty_session(&mut self) -> Result<&mut GameSession, GameError> {
        if self.phase != GamePhase::PenaltyActive {
            return Err(ChallengeError::NoActiveChallenge.into());
        }
        self.session
            .as_mut()
            .ok_or(GameError::Challenge(ChallengeError::NoActiveChallenge))
    }

    fn run_task(&mut self, task: ScheduledTask) -> Result<(), GameError> {
        let stale = GameError::StaleCallback {
            task: task.id.0,
            session: task.session.0,
        };
        if self.session.as_ref().map(|s| s.id) != Some(task.session) {
            return Err(stale);
        }

        match task.kind {
            TaskKind::Resolve => self.resolve_selection(),
            TaskKind::ChallengeTick(id) => self.tick_challenge(task.session, id, stale),
            TaskKind::AdvanceLevel => self.advance_level(),
        }
    }

    fn resolve_selection(&mut self) -> Result<(), GameError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let Some(resolution) = session.engine.resolve() else {
            return Ok(());
        };
        debug!(session = session.id.0, ?resolution, "selection resolved");

        match resolution {
            Resolution::Match {
                first,
                second,
                level_complete,
            } => {
                for id in [first, second] {
                    if let Some(card) = session.engine.card(id) {
                        self.renderer.mark_removed(card);
                    }
                }
                self.events.push(GameEvent::Match { first, second });
                if level_complete {
                    self.complete_level();
                }
            }
            Resolution::Mismatch {
                first,
                second,
                misses,
            } => {
                for id in [first, second] {
                    if let Some(card) = session.engine.card(id) {
                        self.renderer.mark_hidden(card);
                    }
                }
                self.events.push(GameEvent::Mismatch {
                    first,
                    second,
                    misses,
                });
            }
            Resolution::PenaltyTriggered { first, second } => {
                for id in [first, second] {
                    if let Some(card) = session.engine.card(id) {
                        self.renderer.mark_hidden(card);
                    }
                }
                self.start_penalty();
            }
        }
        Ok(())
    }

    fn start_penalty(&mut self) {
        let budget_secs = self.progression.timer_budget(self.progression.current());
        let Some(session) = self.session.as_mut() else {
            return;
        };

        // Only one countdown may run.
        self.scheduler
            .cancel_where(|t| matches!(t.kind, TaskKind::ChallengeTick(_)));

        let challenge = session.penalty.start(budget_secs, &mut self.challenge_rng);
        let challenge_id = challenge.id;

        self.renderer.play_effect(&Effect::QuestionTime);
        self.renderer.show_challenge(challenge);
        self.events.push(GameEvent::PenaltyTriggered {
            challenge: challenge_id,
            question: challenge.question(),
            options: challenge.options.to_vec(),
            budget_secs,
        });

        self.scheduler.schedule(
            self.config.timings.tick_interval_ms,
            session.id,
            TaskKind::ChallengeTick(challenge_id),
        );
        self.phase = GamePhase::PenaltyActive;
        debug!(session = session.id.0, budget_secs, "penalty challenge opened");
    }

    fn tick_challenge(
        &mut self,
        session_id: SessionId,
        id: ChallengeId,
        stale: GameError,
    ) -> Result<(), GameError> {
        if self.phase != GamePhase::PenaltyActive {
            return Err(stale);
        }
        let Some(session) = self.session.as_mut() else {
            return Err(stale);
        };
        if session.penalty.active().map(|c| c.id) != Some(id) {
            return Err(stale);
        }

        match session.penalty.tick() {
            Some(Countdown::Running(remaining_secs)) => {
                let running_low = session
                    .penalty
                    .active()
                    .is_some_and(Challenge::is_running_low);
                self.renderer.update_countdown(remaining_secs, running_low);
                self.events.push(GameEvent::ChallengeTick {
                    remaining_secs,
                    running_low,
                });
                self.scheduler.schedule(
                    self.config.timings.tick_interval_ms,
                    session_id,
                    TaskKind::ChallengeTick(id),
                );
                Ok(())
            }
            Some(Countdown::Expired) => {
                self.renderer.update_countdown(0, true);
                self.finish_challenge(Ok(ChallengeOutcome::TimedOut))
                    .map(|_| ())
            }
            None => Err(stale),
        }
    }

    fn finish_challenge(
        &mut self,
        result: Result<ChallengeOutcome, ChallengeError>,
    ) -> Result<ChallengeOutcome, GameError> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(ChallengeError::InvalidAnswer(input)) => {
                debug!(%input, "invalid answer counts as wrong");
                ChallengeOutcome::Failed
            }
            Err(err) => return Err(err.into()),
        };

        self.scheduler
            .cancel_where(|t| matches!(t.kind, TaskKind::ChallengeTick(_)));
        self.renderer.hide_challenge();
        self.events.push(GameEvent::ChallengeResolved { outcome });

        if outcome.is_pass() {
            if let Some(session) = self.session.as_mut() {
                session.engine.clear_penalty();
            }
            self.phase = GamePhase::LevelActive;
            debug!("penalty passed, board resumed");
        } else {
            self.game_over()?;
        }
        Ok(outcome)
    }

    fn complete_level(&mut self) {
        let level = self.progression.current();
        self.events.push(GameEvent::LevelComplete { level });

        if self.progression.is_final(level) {
            self.scheduler.cancel_all();
            self.phase = GamePhase::GameWon;
            self.renderer.play_effect(&Effect::win_scatter());
            self.events.push(GameEvent::GameWon);
            info!(level, "game won");
            return;
        }

        let Some(session_id) = self.session.as_ref().map(|s| s.id) else {
            return;
        };
        self.phase = GamePhase::LevelTransition;
        self.renderer.play_effect(&Effect::LevelUp);
        self.renderer.play_effect(&Effect::level_banner(level + 1));
        self.scheduler.schedule(
            self.config.timings.announcement_ms,
            session_id,
            TaskKind::AdvanceLevel,
        );
        debug!(level, "level complete");
    }

    fn advance_level(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::LevelTransition {
            return Ok(());
        }
        self.progression.advance()?;
        self.deal_current_level()
    }

    fn game_over(&mut self) -> Result<(), GameError> {
        let level = self.progression.current();
        self.scheduler.cancel_all();
        if let Some(session) = self.session.as_mut() {
            session.penalty.cancel();
        }

        self.renderer.play_effect(&Effect::game_over());
        self.events.push(GameEvent::GameOver { level });
        info!(level, "game over");

        self.progression.reset();
        self.deal_current_level()
    }

    fn deal_current_level(&mut self) -> Result<(), GameError> {
        let level = self.progression.current_level()?;
        self.next_session += 1;
        let session = GameSession::build(
            SessionId(self.next_session),
            level,
            &self.config,
            &*self.provider,
            &mut self.content_rng,
            &mut self.deal_rng,
        );

        self.renderer.clear_board();
        for card in session.engine.cards() {
            self.renderer.render_card(card);
        }
        self.renderer.apply_layout(&session.layout);
        self.renderer.play_effect(&Effect::DominoAppear);

        info!(
            level = level.ordinal,
            cards = level.card_count,
            session = session.id.0,
            "level dealt"
        );
        self.events.push(GameEvent::LevelStarted {
            level: level.ordinal,
            card_count: level.card_count,
        });

        self.session = Some(session);
        self.phase = GamePhase::LevelActive;
        Ok(())
    }
}
