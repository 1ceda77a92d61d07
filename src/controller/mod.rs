//! Game orchestration.
//!
//! `GameController` ties the pieces together:
//! - deals a `GameSession` per level from the content provider and shuffler
//! - routes card clicks to the `MatchEngine`
//! - opens and settles penalty challenges
//! - advances levels, restarts on game over, stops on a win
//!
//! Presentation goes out through the `Renderer` trait; observable events are
//! queued as `GameEvent`s. Delays run on a virtual clock (`Scheduler`) that
//! the host advances.

pub mod events;
pub mod game;
pub mod render;
pub mod scheduler;
pub mod session;

pub use events::GameEvent;
pub use game::{GameController, GamePhase};
pub use render::{Effect, NullRenderer, Renderer, GAME_OVER_TEXT, WIN_TEXT};
pub use scheduler::{ScheduledTask, Scheduler, TaskId, TaskKind};
pub use session::{GameSession, SessionId};
