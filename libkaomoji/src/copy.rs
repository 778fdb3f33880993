//! Copy confirmation state
//!
//! Every card and every detail view owns an independent [`CopyStatus`]. The
//! two variants differ:
//!
//! | | card | detail |
//! |---|---|---|
//! | click while `copied` | ignored | copies again, restarts reset timer |
//! | success | `copied`, reset later, navigate sooner | `copied`, reset later |
//! | failure | navigate now | nothing |
//!
//! [`CopyTracker`] keys statuses by view-instance and owns their timers.
//! Retiring an instance drops its status and pending timers together.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::clipboard::CopyOutcome;
use crate::timer::TimerQueue;

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_NAVIGATE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyVariant {
    /// Grid card: copy, confirm, then open the entry
    Card,
    /// Detail view's copy button
    Detail,
}

/// Delays applied after a successful copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyPolicy {
    /// How long "Copied!" stays up
    pub reset_delay: Duration,
    /// Card only: how long before the copied entry opens
    pub navigate_delay: Duration,
}

impl Default for CopyPolicy {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
            navigate_delay: DEFAULT_NAVIGATE_DELAY,
        }
    }
}

/// Copy status of one card or detail instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStatus {
    pub variant: CopyVariant,
    pub copied: bool,
    /// Token of the reset timer allowed to clear `copied`
    reset_token: Option<u64>,
}

impl CopyStatus {
    pub fn new(variant: CopyVariant) -> Self {
        Self {
            variant,
            copied: false,
            reset_token: None,
        }
    }

    /// Whether a click should start a copy
    pub fn accepts_click(&self) -> bool {
        !(self.variant == CopyVariant::Card && self.copied)
    }

    pub fn has_pending_reset(&self) -> bool {
        self.reset_token.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyTimer {
    Reset { token: u64 },
    Navigate,
}

/// What the caller must do right away after a copy completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFollowUp {
    None,
    /// Open the entry now (card-variant failure)
    NavigateNow,
}

/// Per-instance copy statuses and their timers
#[derive(Debug, Clone)]
pub struct CopyTracker<K> {
    policy: CopyPolicy,
    statuses: HashMap<K, CopyStatus>,
    timers: TimerQueue<K, CopyTimer>,
    next_token: u64,
}

impl<K: Clone + Eq + Hash> CopyTracker<K> {
    pub fn new(policy: CopyPolicy) -> Self {
        Self {
            policy,
            statuses: HashMap::new(),
            timers: TimerQueue::new(),
            next_token: 0,
        }
    }

    pub fn policy(&self) -> CopyPolicy {
        self.policy
    }

    /// A click on `key`; returns whether the copy should be performed
    pub fn request(&mut self, key: K, variant: CopyVariant) -> bool {
        let status = self
            .statuses
            .entry(key)
            .or_insert_with(|| CopyStatus::new(variant));
        let accepted = status.accepts_click();
        if !accepted {
            tracing::trace!("Ignoring click during copy confirmation");
        }
        accepted
    }

    /// Apply the outcome of a copy started for `key`
    pub fn complete(
        &mut self,
        key: K,
        variant: CopyVariant,
        outcome: &CopyOutcome,
        now: Instant,
    ) -> CopyFollowUp {
        match (variant, outcome) {
            (_, CopyOutcome::Copied) => {
                let token = self.next_token;
                self.next_token += 1;

                let status = self
                    .statuses
                    .entry(key.clone())
                    .or_insert_with(|| CopyStatus::new(variant));
                status.copied = true;
                status.reset_token = Some(token);

                self.timers
                    .schedule(key.clone(), now, self.policy.reset_delay, CopyTimer::Reset { token });
                if variant == CopyVariant::Card {
                    self.timers
                        .schedule(key, now, self.policy.navigate_delay, CopyTimer::Navigate);
                }
                CopyFollowUp::None
            }
            (CopyVariant::Card, CopyOutcome::Failed(_)) => CopyFollowUp::NavigateNow,
            (CopyVariant::Detail, CopyOutcome::Failed(_)) => CopyFollowUp::None,
        }
    }

    /// Fire due timers; returns the card keys whose entry should open now
    pub fn tick(&mut self, now: Instant) -> Vec<K> {
        let mut navigations = Vec::new();
        for timer in self.timers.drain_due(now) {
            match timer.effect {
                CopyTimer::Reset { token } => {
                    if let Some(status) = self.statuses.get_mut(&timer.owner) {
                        if status.reset_token == Some(token) {
                            status.copied = false;
                            status.reset_token = None;
                        }
                    }
                }
                CopyTimer::Navigate => navigations.push(timer.owner),
            }
        }
        navigations
    }

    pub fn is_copied(&self, key: &K) -> bool {
        self.statuses.get(key).map(|s| s.copied).unwrap_or(false)
    }

    pub fn status(&self, key: &K) -> Option<&CopyStatus> {
        self.statuses.get(key)
    }

    /// Tear down every instance for which `alive` is false
    pub fn retain(&mut self, mut alive: impl FnMut(&K) -> bool) {
        self.statuses.retain(|k, _| alive(k));
        self.timers.retain_owners(alive);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

impl<K: Clone + Eq + Hash> Default for CopyTracker<K> {
    fn default() -> Self {
        Self::new(CopyPolicy::default())
    }
}
