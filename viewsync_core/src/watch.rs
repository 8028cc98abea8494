// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer lifecycles for intersection-driven animations.
//!
//! [`OneShotSet`] models register → fire once → deregister as an explicit
//! per-target state machine, `Pending → Triggered`, where `Triggered` is
//! terminal. The caller detaches the platform observer from a target exactly
//! when [`OneShotSet::observe`] returns `true`, so memory held by observers
//! shrinks as targets fire.
//!
//! [`RepeatSet`] is the non-detaching variant: every intersecting
//! observation re-applies an idempotent state.

use alloc::vec;
use alloc::vec::Vec;

/// State of one watched target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WatchState {
    /// Waiting for the first intersection.
    Pending,
    /// Fired and detached. Terminal.
    Triggered,
}

/// A set of one-shot watched targets, indexed in registration order.
#[derive(Clone, Debug, Default)]
pub struct OneShotSet {
    states: Vec<WatchState>,
    pending: usize,
}

impl OneShotSet {
    /// Creates a set of `len` pending targets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![WatchState::Pending; len],
            pending: len,
        }
    }

    /// Number of targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the set has no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Records an intersection observation for `index`.
    ///
    /// Returns `true` exactly once per target: on its first intersecting
    /// observation. The caller must then apply the effect and stop observing
    /// the target. Everything else is a no-op.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.states.get_mut(index) {
            Some(state @ WatchState::Pending) => {
                *state = WatchState::Triggered;
                self.pending -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns the state of `index`, if it exists.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<WatchState> {
        self.states.get(index).copied()
    }

    /// Returns `true` if `index` has fired.
    #[must_use]
    pub fn is_triggered(&self, index: usize) -> bool {
        self.state(index) == Some(WatchState::Triggered)
    }

    /// Number of targets still waiting.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
    }

    /// Returns `true` once every target has fired.
    #[must_use]
    pub fn all_triggered(&self) -> bool {
        self.pending == 0
    }
}

/// Watched targets that stay observed and re-apply their state on every
/// intersection.
#[derive(Clone, Debug, Default)]
pub struct RepeatSet {
    seen: Vec<bool>,
}

impl RepeatSet {
    /// Creates a set of `len` unseen targets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            seen: vec![false; len],
        }
    }

    /// Records an observation for `index`.
    ///
    /// Returns `true` whenever the target intersects. The first such call
    /// also marks it seen.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.seen.get_mut(index) {
            Some(seen) => {
                *seen = true;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `index` has intersected at least once.
    #[must_use]
    pub fn has_seen(&self, index: usize) -> bool {
        self.seen.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_target() {
        let mut set = OneShotSet::new(3);
        assert_eq!(set.pending_count(), 3);

        assert!(set.observe(1, true));
        assert!(!set.observe(1, true), "second intersection is a no-op");
        assert!(set.is_triggered(1));
        assert!(!set.is_triggered(0));
        assert_eq!(set.pending_count(), 2);
    }

    #[test]
    fn non_intersecting_is_ignored() {
        let mut set = OneShotSet::new(1);
        assert!(!set.observe(0, false));
        assert_eq!(set.state(0), Some(WatchState::Pending));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set = OneShotSet::new(1);
        assert!(!set.observe(7, true));
        assert_eq!(set.state(7), None);
        assert_eq!(set.pending_count(), 1);
    }

    #[test]
    fn all_triggered_after_each_fires() {
        let mut set = OneShotSet::new(2);
        set.observe(0, true);
        assert!(!set.all_triggered());
        set.observe(1, true);
        assert!(set.all_triggered());
        assert!(OneShotSet::new(0).all_triggered());
    }

    #[test]
    fn repeat_set_reapplies() {
        let mut set = RepeatSet::new(2);
        assert!(!set.has_seen(0));
        assert!(set.observe(0, true));
        assert!(set.observe(0, true));
        assert!(!set.observe(0, false));
        assert!(set.has_seen(0));
        assert!(!set.observe(9, true));
    }
}
