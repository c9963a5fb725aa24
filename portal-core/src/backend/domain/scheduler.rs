//! Virtual-time scheduler for delayed completions.
//!
//! Simulated downloads and payments finish "a moment later". Instead of real
//! timers, the delay is recorded here and whoever owns the clock (a browser
//! interval, or a test) calls [`TaskScheduler::advance`]. Each task fires at
//! most once and can be cancelled until it does.

use log::debug;
use std::time::Duration;

/// Handle to a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug)]
struct ScheduledTask<T> {
    id: TaskId,
    due: Duration,
    payload: T,
}

#[derive(Debug)]
pub struct TaskScheduler<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<ScheduledTask<T>>,
}

impl<T> Default for TaskScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TaskScheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Virtual time elapsed since the scheduler was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to fire `delay` after the current virtual time
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;
        debug!("Scheduled task {:?} due at {:?}", id, due);
        self.pending.push(ScheduledTask { id, due, payload });
        id
    }

    /// Cancel a task that has not fired yet
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.id != id);
        self.pending.len() != before
    }

    /// Cancel everything, e.g. when the hosting view goes away
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|task| task.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Time until the next task is due, if any
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|task| task.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward and return the payloads of every task now due,
    /// ordered by due time and then by scheduling order
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        self.now += by;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|task| task.due <= now);
        self.pending = pending;

        due.sort_by_key(|task| (task.due, task.id));
        if !due.is_empty() {
            debug!("{} task(s) fired at {:?}", due.len(), now);
        }
        due.into_iter().map(|task| task.payload).collect()
    }
}
