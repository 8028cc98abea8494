// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame batching.
//!
//! Scroll and resize events arrive in bursts, many per rendered frame. The
//! [`FrameCoalescer`] turns any number of "this needs recomputing" signals
//! into at most one run of each job per frame:
//!
//! 1. [`request`](FrameCoalescer::request) marks a [`FrameJob`] dirty. It
//!    returns `true` only for the first request since the last flush; the
//!    caller schedules exactly one frame callback in that case.
//! 2. The frame callback calls [`flush`](FrameCoalescer::flush), which
//!    clears the pending flag *before* handing back the deduplicated jobs.
//!    A job that requests more work while running therefore schedules a new
//!    frame instead of being lost.
//!
//! There is no backlog: requests made while a frame is pending are absorbed
//! by that frame.
//!
//! Dirty state is tracked with [`understory_dirty`] on a single channel,
//! keyed by job.

use alloc::vec::Vec;

use understory_dirty::{Channel, CycleHandling, DirtyTracker};

/// Jobs are keyed on this channel.
const FRAME: Channel = Channel::new(0);

/// Work that runs at most once per frame.
///
/// Jobs in a [`FrameBatch`] are ordered by declaration order here, so layout
/// writes (the sidebar offset) land before the measurements that depend on
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FrameJob {
    /// Re-apply the pinned-sidebar content offset.
    SidebarOffset,
    /// Re-select the active section from the scroll position.
    ActiveSection,
    /// Re-measure and re-place the nav indicator.
    Indicator,
    /// Recompute the timeline fill.
    Timeline,
}

impl FrameJob {
    /// Every job, in run order.
    pub const ALL: [Self; 4] = [
        Self::SidebarOffset,
        Self::ActiveSection,
        Self::Indicator,
        Self::Timeline,
    ];

    const fn key(self) -> u32 {
        match self {
            Self::SidebarOffset => 0,
            Self::ActiveSection => 1,
            Self::Indicator => 2,
            Self::Timeline => 3,
        }
    }

    fn from_key(key: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|job| job.key() == key)
    }
}

/// The jobs to run in one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameBatch {
    /// Zero-based count of flushed frames.
    pub frame_index: u64,
    /// Jobs to run, each at most once, in [`FrameJob`] order.
    pub jobs: Vec<FrameJob>,
}

impl FrameBatch {
    /// Returns `true` if `job` runs in this batch.
    #[must_use]
    pub fn contains(&self, job: FrameJob) -> bool {
        self.jobs.contains(&job)
    }
}

/// Coalesces job requests into per-frame batches.
pub struct FrameCoalescer {
    dirty: DirtyTracker<u32>,
    pending: bool,
    frames: u64,
}

impl core::fmt::Debug for FrameCoalescer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameCoalescer")
            .field("pending", &self.pending)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl Default for FrameCoalescer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameCoalescer {
    /// Creates a coalescer with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending: false,
            frames: 0,
        }
    }

    /// Marks `job` dirty.
    ///
    /// Returns `true` if the caller must schedule a frame callback, which is
    /// the case only for the first request since the last flush.
    #[must_use = "a `true` result means a frame callback must be scheduled"]
    pub fn request(&mut self, job: FrameJob) -> bool {
        self.dirty.mark(job.key(), FRAME);
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Returns `true` while a frame callback is scheduled but not yet run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of frames flushed so far.
    #[must_use]
    pub fn frames_flushed(&self) -> u64 {
        self.frames
    }

    /// Clears the pending flag and returns this frame's jobs.
    pub fn flush(&mut self) -> FrameBatch {
        self.pending = false;
        let frame_index = self.frames;
        self.frames += 1;

        let mut jobs: Vec<FrameJob> = self
            .dirty
            .drain(FRAME)
            .deterministic()
            .run()
            .filter_map(FrameJob::from_key)
            .collect();
        jobs.sort_unstable();
        jobs.dedup();

        FrameBatch { frame_index, jobs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_schedules() {
        let mut c = FrameCoalescer::new();
        assert!(!c.is_pending());
        assert!(c.request(FrameJob::ActiveSection));
        assert!(c.is_pending());
    }

    #[test]
    fn burst_schedules_once_and_runs_once() {
        let mut c = FrameCoalescer::new();
        let scheduled = (0..50)
            .filter(|_| c.request(FrameJob::ActiveSection))
            .count();
        assert_eq!(scheduled, 1);

        let batch = c.flush();
        assert_eq!(batch.jobs, [FrameJob::ActiveSection]);
        assert!(!c.is_pending());
    }

    #[test]
    fn batch_is_ordered() {
        let mut c = FrameCoalescer::new();
        let _ = c.request(FrameJob::Timeline);
        let _ = c.request(FrameJob::Indicator);
        let _ = c.request(FrameJob::SidebarOffset);
        let _ = c.request(FrameJob::Timeline);
        let batch = c.flush();
        assert_eq!(
            batch.jobs,
            [
                FrameJob::SidebarOffset,
                FrameJob::Indicator,
                FrameJob::Timeline
            ]
        );
        assert!(batch.contains(FrameJob::Indicator));
        assert!(!batch.contains(FrameJob::ActiveSection));
    }

    #[test]
    fn request_during_flush_schedules_next_frame() {
        let mut c = FrameCoalescer::new();
        let _ = c.request(FrameJob::ActiveSection);
        let first = c.flush();
        assert_eq!(first.frame_index, 0);

        // A job running in this frame asks for the indicator.
        assert!(c.request(FrameJob::Indicator));
        let second = c.flush();
        assert_eq!(second.frame_index, 1);
        assert_eq!(second.jobs, [FrameJob::Indicator]);
        assert_eq!(c.frames_flushed(), 2);
    }

    #[test]
    fn empty_flush() {
        let mut c = FrameCoalescer::new();
        let batch = c.flush();
        assert!(batch.jobs.is_empty());
    }

    #[test]
    fn keys_round_trip() {
        for job in FrameJob::ALL {
            assert_eq!(FrameJob::from_key(job.key()), Some(job));
        }
        assert_eq!(FrameJob::from_key(99), None);
    }
}
