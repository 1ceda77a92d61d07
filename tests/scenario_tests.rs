//! Whole-game scenarios driven through `GameController`.
//!
//! A scripted player reads pair keys straight off the board, so every test
//! is deterministic regardless of the shuffle.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pair_recall::{
    BoardLayout, Card, CardContent, CardId, ChallengeError, ChallengeOutcome, ContentPair,
    ContentProvider, Effect, GameConfig, GameController, GameError, GameEvent, GamePhase,
    GameRng, LevelOverflow, PairKey, Renderer, RevealError, SessionId, Timings,
};
use pair_recall::controller::{GAME_OVER_TEXT, WIN_TEXT};

// =============================================================================
// Helpers
// =============================================================================

/// Renderer that remembers what it was told.
#[derive(Debug, Default)]
struct RecordingRenderer {
    effects: Vec<Effect>,
    rendered: usize,
    revealed: usize,
    hidden: usize,
    removed: usize,
    layouts: Vec<BoardLayout>,
    countdowns: Vec<(u32, bool)>,
    challenges_shown: usize,
    challenges_hidden: usize,
    boards_cleared: usize,
}

impl Renderer for RecordingRenderer {
    fn render_card(&mut self, _card: &Card) {
        self.rendered += 1;
    }

    fn mark_revealed(&mut self, _card: &Card) {
        self.revealed += 1;
    }

    fn mark_removed(&mut self, _card: &Card) {
        self.removed += 1;
    }

    fn apply_layout(&mut self, layout: &BoardLayout) {
        self.layouts.push(*layout);
    }

    fn play_effect(&mut self, effect: &Effect) {
        self.effects.push(effect.clone());
    }

    fn mark_hidden(&mut self, _card: &Card) {
        self.hidden += 1;
    }

    fn clear_board(&mut self) {
        self.boards_cleared += 1;
    }

    fn show_challenge(&mut self, _challenge: &pair_recall::Challenge) {
        self.challenges_shown += 1;
    }

    fn update_countdown(&mut self, remaining_secs: u32, running_low: bool) {
        self.countdowns.push((remaining_secs, running_low));
    }

    fn hide_challenge(&mut self) {
        self.challenges_hidden += 1;
    }
}

type Ctl = GameController<RecordingRenderer>;

const REVEAL: Duration = Duration::from_millis(600);
const BANNER: Duration = Duration::from_millis(2500);

fn started(config: GameConfig, seed: u64) -> Ctl {
    let mut ctl = GameController::new(config, RecordingRenderer::default(), seed).unwrap();
    ctl.start_game().unwrap();
    ctl
}

fn fast_config() -> GameConfig {
    GameConfig::new().with_timings(Timings {
        reveal_delay_ms: 0,
        tick_interval_ms: 1000,
        announcement_ms: 0,
    })
}

fn board(ctl: &Ctl) -> SessionId {
    ctl.session_id().unwrap()
}

/// Two active cards sharing a key.
fn matching_pair(ctl: &Ctl) -> (CardId, CardId) {
    let cards = ctl.session().unwrap().engine.cards();
    let first = cards.iter().find(|c| c.is_active()).unwrap();
    let second = cards
        .iter()
        .find(|c| c.is_active() && first.pairs_with(c))
        .unwrap();
    (first.id, second.id)
}

/// Two active cards with different keys.
fn mismatched_pair(ctl: &Ctl) -> (CardId, CardId) {
    let cards = ctl.session().unwrap().engine.cards();
    let first = cards.iter().find(|c| c.is_active()).unwrap();
    let second = cards
        .iter()
        .find(|c| c.is_active() && c.key != first.key)
        .unwrap();
    (first.id, second.id)
}

fn flip(ctl: &mut Ctl, (a, b): (CardId, CardId), delay: Duration) {
    let board = ctl.session_id().unwrap();
    ctl.on_card_activated(board, a).unwrap();
    ctl.on_card_activated(board, b).unwrap();
    ctl.advance_time(delay).unwrap();
}

/// Clear every pair on the current board.
fn clear_level(ctl: &mut Ctl, delay: Duration) {
    let level = ctl.level();
    while ctl.phase() == GamePhase::LevelActive
        && ctl.level() == level
        && !ctl.session().unwrap().engine.is_complete()
    {
        let pair = matching_pair(ctl);
        flip(ctl, pair, delay);
    }
}

/// Miss until the penalty question opens.
fn trigger_penalty(ctl: &mut Ctl) {
    for _ in 0..ctl.config().miss_threshold {
        let pair = mismatched_pair(ctl);
        flip(ctl, pair, REVEAL);
    }
    assert_eq!(ctl.phase(), GamePhase::PenaltyActive);
}

fn count_events(events: &[GameEvent], pred: impl Fn(&GameEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(*e)).count()
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn test_match_removes_pair_and_keeps_misses_at_zero() {
    let mut ctl = started(GameConfig::default(), 11);
    ctl.take_events();

    let (a, b) = matching_pair(&ctl);
    flip(&mut ctl, (a, b), REVEAL);

    let session = ctl.session().unwrap();
    assert!(session.engine.card(a).unwrap().removed);
    assert!(session.engine.card(b).unwrap().removed);
    assert_eq!(session.engine.misses(), 0);
    assert_eq!(session.engine.remaining(), 6);
    assert_eq!(ctl.renderer().removed, 2);

    let events = ctl.take_events();
    assert_eq!(
        events,
        vec![
            GameEvent::CardRevealed { card: a },
            GameEvent::CardRevealed { card: b },
            GameEvent::Match { first: a, second: b },
        ]
    );
}

#[test]
fn test_match_resets_consecutive_misses() {
    let mut ctl = started(GameConfig::default(), 12);

    let miss = mismatched_pair(&ctl);
    flip(&mut ctl, miss, REVEAL);
    assert_eq!(ctl.session().unwrap().engine.misses(), 1);

    let pair = matching_pair(&ctl);
    flip(&mut ctl, pair, REVEAL);
    assert_eq!(ctl.session().unwrap().engine.misses(), 0);

    // One more miss is not enough after the reset.
    let miss = mismatched_pair(&ctl);
    flip(&mut ctl, miss, REVEAL);
    assert_eq!(ctl.phase(), GamePhase::LevelActive);
}

#[test]
fn test_third_card_rejected_while_resolving() {
    let mut ctl = started(GameConfig::default(), 13);
    let (a, b) = mismatched_pair(&ctl);
    ctl.on_card_activated(board(&ctl), a).unwrap();
    ctl.on_card_activated(board(&ctl), b).unwrap();

    let third = ctl
        .session()
        .unwrap()
        .engine
        .cards()
        .iter()
        .find(|c| c.id != a && c.id != b)
        .unwrap()
        .id;
    assert_eq!(
        ctl.on_card_activated(board(&ctl), third),
        Err(GameError::InvalidReveal(RevealError::ResolutionPending))
    );
    assert!(!ctl.session().unwrap().engine.card(third).unwrap().is_revealed());
}

#[test]
fn test_same_card_twice_rejected() {
    let mut ctl = started(GameConfig::default(), 14);
    let (a, _) = matching_pair(&ctl);
    ctl.on_card_activated(board(&ctl), a).unwrap();
    assert_eq!(
        ctl.on_card_activated(board(&ctl), a),
        Err(GameError::InvalidReveal(RevealError::AlreadyRevealed(a)))
    );
    assert_eq!(ctl.session().unwrap().engine.selection(), &[a]);
}

#[test]
fn test_removed_card_rejected() {
    let mut ctl = started(GameConfig::default(), 15);
    let (a, b) = matching_pair(&ctl);
    flip(&mut ctl, (a, b), REVEAL);
    assert_eq!(
        ctl.on_card_activated(board(&ctl), a),
        Err(GameError::InvalidReveal(RevealError::AlreadyRemoved(a)))
    );
}

// =============================================================================
// Penalty
// =============================================================================

#[test]
fn test_second_consecutive_miss_opens_penalty() {
    let mut ctl = started(GameConfig::default(), 21);
    ctl.take_events();

    let first = mismatched_pair(&ctl);
    flip(&mut ctl, first, REVEAL);
    let events = ctl.take_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::Mismatch { misses: 1, .. })));
    assert_eq!(ctl.phase(), GamePhase::LevelActive);

    let second = mismatched_pair(&ctl);
    flip(&mut ctl, second, REVEAL);
    let events = ctl.take_events();
    let triggered = events
        .iter()
        .find_map(|e| match e {
            GameEvent::PenaltyTriggered {
                question,
                options,
                budget_secs,
                ..
            } => Some((question.clone(), options.clone(), *budget_secs)),
            _ => None,
        })
        .unwrap();

    let challenge = ctl.challenge().unwrap();
    assert_eq!(triggered.0, challenge.question());
    assert_eq!(triggered.1.len(), 3);
    assert!(triggered.1.contains(&challenge.answer()));
    assert_eq!(triggered.2, 20);

    assert_eq!(ctl.phase(), GamePhase::PenaltyActive);
    assert_eq!(ctl.session().unwrap().engine.misses(), 0);
    assert_eq!(ctl.renderer().hidden, 4);
    assert_eq!(ctl.renderer().challenges_shown, 1);
    assert!(ctl.renderer().effects.contains(&Effect::QuestionTime));
}

#[test]
fn test_board_locked_during_penalty() {
    let mut ctl = started(GameConfig::default(), 22);
    trigger_penalty(&mut ctl);

    let (a, _) = matching_pair(&ctl);
    assert_eq!(
        ctl.on_card_activated(board(&ctl), a),
        Err(GameError::InvalidReveal(RevealError::PenaltyPending))
    );
}

#[test]
fn test_correct_answer_resumes_level() {
    let mut ctl = started(GameConfig::default(), 23);
    trigger_penalty(&mut ctl);
    ctl.take_events();

    ctl.advance_time(Duration::from_millis(3000)).unwrap();
    let answer = ctl.challenge().unwrap().answer();
    assert_eq!(ctl.on_answer_chosen(answer), Ok(ChallengeOutcome::Passed));
    assert_eq!(ctl.phase(), GamePhase::LevelActive);
    assert!(ctl.challenge().is_none());

    // The countdown stopped with the answer.
    ctl.take_events();
    ctl.advance_time(Duration::from_secs(30)).unwrap();
    let events = ctl.take_events();
    assert_eq!(
        count_events(&events, |e| matches!(e, GameEvent::ChallengeTick { .. })),
        0
    );
    assert_eq!(
        count_events(&events, |e| matches!(e, GameEvent::GameOver { .. })),
        0
    );
    assert_eq!(ctl.renderer().challenges_hidden, 1);

    // Play continues on the same board.
    let pair = matching_pair(&ctl);
    flip(&mut ctl, pair, REVEAL);
    assert_eq!(ctl.session().unwrap().engine.remaining(), 6);
}

#[test]
fn test_wrong_answer_restarts_game() {
    let mut ctl = started(fast_config(), 24);
    clear_level(&mut ctl, Duration::ZERO);
    assert_eq!(ctl.level(), 2);

    trigger_penalty(&mut ctl);
    ctl.take_events();

    let challenge = ctl.challenge().unwrap();
    let wrong = *challenge
        .options
        .iter()
        .find(|&&o| o != challenge.answer())
        .unwrap();
    assert_eq!(ctl.on_answer_chosen(wrong), Ok(ChallengeOutcome::Failed));

    let events = ctl.take_events();
    assert_eq!(
        events,
        vec![
            GameEvent::ChallengeResolved {
                outcome: ChallengeOutcome::Failed
            },
            GameEvent::GameOver { level: 2 },
            GameEvent::LevelStarted {
                level: 1,
                card_count: 8
            },
        ]
    );
    assert_eq!(ctl.level(), 1);
    assert_eq!(ctl.phase(), GamePhase::LevelActive);
    assert!(ctl.renderer().effects.contains(&Effect::GameOver {
        text: GAME_OVER_TEXT.to_string()
    }));
}

#[test]
fn test_unparseable_input_fails_challenge() {
    let mut ctl = started(GameConfig::default(), 25);
    trigger_penalty(&mut ctl);
    ctl.take_events();

    assert_eq!(ctl.on_answer_input("seven"), Ok(ChallengeOutcome::Failed));
    let events = ctl.take_events();
    assert!(events.contains(&GameEvent::GameOver { level: 1 }));
    assert_eq!(ctl.pending_tasks(), 0);
}

#[test]
fn test_typed_correct_answer_passes() {
    let mut ctl = started(GameConfig::default(), 26);
    trigger_penalty(&mut ctl);
    let answer = ctl.challenge().unwrap().answer();
    assert_eq!(
        ctl.on_answer_input(&format!(" {answer} ")),
        Ok(ChallengeOutcome::Passed)
    );
}

#[test]
fn test_answer_after_resolution_rejected() {
    let mut ctl = started(GameConfig::default(), 27);
    trigger_penalty(&mut ctl);
    let answer = ctl.challenge().unwrap().answer();
    ctl.on_answer_chosen(answer).unwrap();
    assert_eq!(
        ctl.on_answer_chosen(answer),
        Err(GameError::Challenge(ChallengeError::NoActiveChallenge))
    );
}

#[test]
fn test_timeout_restarts_at_level_one() {
    let mut ctl = started(fast_config(), 31);
    clear_level(&mut ctl, Duration::ZERO);
    clear_level(&mut ctl, Duration::ZERO);
    assert_eq!(ctl.level(), 3);
    assert_eq!(ctl.timer_budget(), 18);

    trigger_penalty(&mut ctl);
    ctl.take_events();

    // One second short of the budget.
    ctl.advance_time(Duration::from_millis(17_000)).unwrap();
    assert_eq!(ctl.phase(), GamePhase::PenaltyActive);
    assert_eq!(ctl.challenge().unwrap().remaining_secs, 1);

    ctl.advance_time(Duration::from_millis(1000)).unwrap();
    let events = ctl.take_events();

    let ticks: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::ChallengeTick {
                remaining_secs,
                running_low,
            } => Some((*remaining_secs, *running_low)),
            _ => None,
        })
        .collect();
    assert_eq!(ticks.len(), 17);
    assert_eq!(ticks[0], (17, false));
    assert_eq!(ticks[11], (6, false));
    assert_eq!(ticks[12], (5, true));
    assert_eq!(ticks[16], (1, true));

    let tail = &events[events.len() - 3..];
    assert_eq!(
        tail,
        &[
            GameEvent::ChallengeResolved {
                outcome: ChallengeOutcome::TimedOut
            },
            GameEvent::GameOver { level: 3 },
            GameEvent::LevelStarted {
                level: 1,
                card_count: 8
            },
        ]
    );
    assert_eq!(ctl.renderer().countdowns.last(), Some(&(0, true)));

    assert_eq!(ctl.level(), 1);
    assert_eq!(ctl.timer_budget(), 20);
    assert_eq!(ctl.phase(), GamePhase::LevelActive);
    assert_eq!(ctl.session().unwrap().engine.cards().len(), 8);
    assert_eq!(ctl.session().unwrap().engine.misses(), 0);
}

#[test]
fn test_old_countdown_ignored_after_restart() {
    let mut ctl = started(GameConfig::default(), 32);
    trigger_penalty(&mut ctl);
    let answer = ctl.challenge().unwrap().answer();
    let wrong = answer + 100;
    // Not an option: counts as a failed answer.
    assert_eq!(ctl.on_answer_chosen(wrong), Ok(ChallengeOutcome::Failed));
    ctl.take_events();

    ctl.advance_time(Duration::from_secs(60)).unwrap();
    assert!(ctl.take_events().is_empty());
    assert_eq!(ctl.phase(), GamePhase::LevelActive);
}

// =============================================================================
// Progression
// =============================================================================

#[test]
fn test_level_banner_then_next_board() {
    let mut ctl = started(GameConfig::default(), 41);
    clear_level(&mut ctl, REVEAL);

    assert_eq!(ctl.phase(), GamePhase::LevelTransition);
    assert!(ctl.renderer().effects.contains(&Effect::LevelUp));
    assert!(ctl.renderer().effects.contains(&Effect::LevelBanner {
        level: 2,
        text: "Welcome to Level 2!".into()
    }));
    assert_eq!(ctl.level(), 1);

    ctl.advance_time(BANNER).unwrap();
    assert_eq!(ctl.phase(), GamePhase::LevelActive);
    assert_eq!(ctl.level(), 2);
    assert_eq!(ctl.session().unwrap().engine.cards().len(), 12);

    let layout = ctl.renderer().layouts.last().copied().unwrap();
    assert_eq!((layout.columns, layout.rows), (4, 4));
    assert_eq!(ctl.renderer().boards_cleared, 2);
    assert_eq!(ctl.renderer().rendered, 8 + 12);
}

#[test]
fn test_full_game_is_won_once() {
    let mut ctl = started(fast_config(), 51);

    for level in 1..=15 {
        assert_eq!(ctl.level(), level);
        clear_level(&mut ctl, Duration::ZERO);
    }

    assert_eq!(ctl.phase(), GamePhase::GameWon);
    assert_eq!(ctl.pending_tasks(), 0);

    let events = ctl.take_events();
    assert_eq!(count_events(&events, |e| *e == GameEvent::GameWon), 1);
    assert_eq!(
        count_events(&events, |e| matches!(e, GameEvent::LevelStarted { .. })),
        15
    );
    assert_eq!(events.last(), Some(&GameEvent::GameWon));
    assert_eq!(
        ctl.renderer()
            .effects
            .iter()
            .filter(|e| matches!(e, Effect::WinScatter { .. }))
            .count(),
        1
    );
    assert!(ctl.renderer().effects.contains(&Effect::WinScatter {
        text: WIN_TEXT.to_string()
    }));

    // Nothing further happens until a new game starts.
    assert_eq!(
        ctl.on_card_activated(SessionId(0), CardId::new(0)),
        Err(GameError::GameFinished)
    );
    ctl.advance_time(Duration::from_secs(10)).unwrap();
    assert!(ctl.take_events().is_empty());

    ctl.start_game().unwrap();
    assert_eq!(ctl.level(), 1);
    assert_eq!(ctl.phase(), GamePhase::LevelActive);
}

#[test]
fn test_heterogeneous_levels_are_winnable() {
    let mut ctl = started(fast_config(), 52);
    for _ in 1..5 {
        clear_level(&mut ctl, Duration::ZERO);
    }
    assert_eq!(ctl.level(), 5);

    // Problem and solution faces differ; the pair key ties them.
    let (a, b) = matching_pair(&ctl);
    let session = ctl.session().unwrap();
    assert_ne!(
        session.engine.card(a).unwrap().content,
        session.engine.card(b).unwrap().content
    );

    clear_level(&mut ctl, Duration::ZERO);
    assert_eq!(ctl.level(), 6);
}

#[test]
fn test_same_seed_same_game() {
    let a = started(GameConfig::default(), 99);
    let b = started(GameConfig::default(), 99);
    let keys = |ctl: &Ctl| -> Vec<_> {
        ctl.session()
            .unwrap()
            .engine
            .cards()
            .iter()
            .map(|c| (c.key, c.content.clone()))
            .collect()
    };
    assert_eq!(keys(&a), keys(&b));
}

#[test]
fn test_overflow_reject_still_ends_on_final_level() {
    let config = fast_config()
        .with_level_card_counts(vec![4, 6])
        .with_overflow(LevelOverflow::Reject);
    let mut ctl = started(config, 53);

    clear_level(&mut ctl, Duration::ZERO);
    assert_eq!(ctl.level(), 2);
    clear_level(&mut ctl, Duration::ZERO);

    assert_eq!(ctl.phase(), GamePhase::GameWon);
    assert_eq!(ctl.level(), 2);
    assert_eq!(ctl.pending_tasks(), 0);
    assert_eq!(ctl.timer_budget(), 20);
}

// =============================================================================
// Stale input and timing
// =============================================================================

#[test]
fn test_click_from_previous_level_is_dropped() {
    let mut ctl = started(GameConfig::default(), 61);
    let old = board(&ctl);
    let card = CardId::new(0);

    clear_level(&mut ctl, REVEAL);
    assert_eq!(
        ctl.on_card_activated(old, card),
        Err(GameError::InvalidReveal(RevealError::InputLocked))
    );

    ctl.advance_time(BANNER).unwrap();
    let current = board(&ctl);
    assert_ne!(old, current);
    ctl.take_events();
    let revealed = ctl.renderer().revealed;

    assert_eq!(
        ctl.on_card_activated(old, card),
        Err(GameError::StaleInput {
            session: old.0,
            current: current.0,
        })
    );
    let session = ctl.session().unwrap();
    assert!(session.engine.selection().is_empty());
    assert!(!session.engine.card(card).unwrap().is_revealed());
    assert_eq!(ctl.renderer().revealed, revealed);
    assert!(ctl.take_events().is_empty());

    // The same card on the current board is fine.
    assert_eq!(ctl.on_card_activated(current, card), Ok(()));
}

#[test]
fn test_resolve_and_ticks_in_one_advance() {
    let mut ctl = started(GameConfig::default(), 71);
    let miss = mismatched_pair(&ctl);
    flip(&mut ctl, miss, REVEAL);
    ctl.take_events();

    // Second miss: resolve at 600ms, then ticks at 1600..=5600ms.
    let (a, b) = mismatched_pair(&ctl);
    let current = board(&ctl);
    ctl.on_card_activated(current, a).unwrap();
    ctl.on_card_activated(current, b).unwrap();
    ctl.advance_time(Duration::from_millis(5600)).unwrap();

    let events = ctl.take_events();
    let names: Vec<_> = events.iter().map(GameEvent::name).collect();
    assert_eq!(
        names,
        vec![
            "card_revealed",
            "card_revealed",
            "penalty_triggered",
            "challenge_tick",
            "challenge_tick",
            "challenge_tick",
            "challenge_tick",
            "challenge_tick",
        ]
    );
    assert_eq!(ctl.challenge().unwrap().remaining_secs, 15);
    assert_eq!(ctl.now(), Duration::from_millis(600 + 5600));

    // The rest of the countdown, the timeout and the restart in one call.
    ctl.advance_time(Duration::from_secs(60)).unwrap();
    let events = ctl.take_events();
    assert_eq!(
        count_events(&events, |e| matches!(e, GameEvent::ChallengeTick { .. })),
        14
    );
    assert_eq!(
        &events[events.len() - 3..],
        &[
            GameEvent::ChallengeResolved {
                outcome: ChallengeOutcome::TimedOut
            },
            GameEvent::GameOver { level: 1 },
            GameEvent::LevelStarted {
                level: 1,
                card_count: 8
            },
        ]
    );
    assert_eq!(ctl.pending_tasks(), 0);
}

#[test]
fn test_resolve_and_level_advance_in_one_advance() {
    let mut ctl = started(GameConfig::default(), 72);
    while ctl.session().unwrap().engine.remaining() > 2 {
        let pair = matching_pair(&ctl);
        flip(&mut ctl, pair, REVEAL);
    }

    let (a, b) = matching_pair(&ctl);
    let current = board(&ctl);
    ctl.on_card_activated(current, a).unwrap();
    ctl.on_card_activated(current, b).unwrap();
    ctl.take_events();
    ctl.advance_time(REVEAL + BANNER).unwrap();

    let names: Vec<_> = ctl.take_events().iter().map(GameEvent::name).collect();
    assert_eq!(names, vec!["match", "level_complete", "level_started"]);
    assert_eq!(ctl.level(), 2);
    assert_eq!(ctl.phase(), GamePhase::LevelActive);
    assert_ne!(board(&ctl), current);
}

// =============================================================================
// Custom content
// =============================================================================

/// Letter pairs that remember which levels asked for content.
#[derive(Clone, Default)]
struct LetterPairs {
    requests: Rc<RefCell<Vec<(u32, usize)>>>,
}

impl ContentProvider for LetterPairs {
    fn generate(&self, level: u32, total_pairs: usize, _rng: &mut GameRng) -> Vec<ContentPair> {
        self.requests.borrow_mut().push((level, total_pairs));
        (0..total_pairs)
            .map(|i| {
                let letter = char::from(b'A' + (i % 26) as u8).to_string();
                ContentPair::twin(PairKey::new(i as u32), CardContent::Text(letter))
            })
            .collect()
    }
}

#[test]
fn test_custom_provider_deals_every_level() {
    let provider = LetterPairs::default();
    let requests = Rc::clone(&provider.requests);
    let config = fast_config().with_level_card_counts(vec![4, 6]);

    let mut ctl = GameController::new(config, RecordingRenderer::default(), 81)
        .unwrap()
        .with_provider(provider);
    ctl.start_game().unwrap();

    let labels: Vec<_> = ctl
        .session()
        .unwrap()
        .engine
        .cards()
        .iter()
        .map(|c| c.content.clone())
        .collect();
    assert_eq!(labels.len(), 4);
    for letter in ["A", "B"] {
        let content = CardContent::Text(letter.to_string());
        assert_eq!(labels.iter().filter(|&c| *c == content).count(), 2);
    }

    clear_level(&mut ctl, Duration::ZERO);
    clear_level(&mut ctl, Duration::ZERO);
    assert_eq!(ctl.phase(), GamePhase::GameWon);
    assert_eq!(*requests.borrow(), vec![(1, 2), (2, 3)]);
}
