//! Virtual-clock task scheduler.
//!
//! Every delayed step of the game is a `ScheduledTask` tagged with the
//! session it belongs to. The host advances the clock; the controller pops
//! due tasks in order and drops any whose session is no longer current.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::penalty::ChallengeId;

use super::session::SessionId;

/// Handle for cancelling a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// What a task does when it comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Compare the two revealed cards.
    Resolve,
    /// One second of a penalty countdown.
    ChallengeTick(ChallengeId),
    /// Level banner finished; deal the next level.
    AdvanceLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub due_ms: u64,
    pub session: SessionId,
    pub kind: TaskKind,
}

/// Pending tasks on a millisecond clock.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    tasks: FxHashMap<TaskId, ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Schedule `kind` to run `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, session: SessionId, kind: TaskKind) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.insert(
            id,
            ScheduledTask {
                id,
                due_ms: self.now_ms.saturating_add(delay_ms),
                session,
                kind,
            },
        );
        id
    }

    /// Cancel every task matching `pred`. Returns how many were removed.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&ScheduledTask) -> bool) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !pred(task));
        before - self.tasks.len()
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Remove and return the earliest task due at or before `until_ms`.
    ///
    /// Ties run in scheduling order. The clock moves to the task's due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<ScheduledTask> {
        let id = self
            .tasks
            .values()
            .filter(|t| t.due_ms <= until_ms)
            .min_by_key(|t| (t.due_ms, t.id))
            .map(|t| t.id)?;
        let task = self.tasks.remove(&id)?;
        self.now_ms = self.now_ms.max(task.due_ms);
        Some(task)
    }

    /// Move the clock forward without running anything.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
