//! Owner-scoped timer queue
//!
//! Timers are plain data: a due instant, the owning view instance and an
//! effect. The shell drains due timers on its own loop, so nothing fires
//! concurrently with a state transition. Discarding an owner with
//! [`TimerQueue::retain_owners`] drops its pending timers; they never fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<K, E> {
    pub due: Instant,
    pub owner: K,
    pub effect: E,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<K, E> {
    pending: Vec<Scheduled<K, E>>,
}

impl<K, E> Default for TimerQueue<K, E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K, E> TimerQueue<K, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, owner: K, now: Instant, delay: Duration, effect: E) {
        self.pending.push(Scheduled {
            due: now + delay,
            owner,
            effect,
        });
    }

    /// Remove and return every timer due at `now`, earliest first
    pub fn drain_due(&mut self, now: Instant) -> Vec<Scheduled<K, E>> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = pending;
        due.sort_by_key(|t| t.due);
        due
    }

    /// Keep only timers whose owner is still alive
    pub fn retain_owners(&mut self, mut alive: impl FnMut(&K) -> bool) {
        self.pending.retain(|t| alive(&t.owner));
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
