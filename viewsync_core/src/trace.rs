// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page behaviors.
//!
//! This module provides a [`TraceSink`] trait with one method per event the
//! behaviors emit. All method bodies default to no-ops, so implementing only
//! the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — gates [`ProgressEvent`], which fires on
//!   every scroll event.

use crate::coalesce::FrameBatch;
use crate::geometry::IndicatorPlacement;
use crate::nav::{ActivationCause, ActiveChange};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which intersection-driven behavior fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WatchKind {
    /// A `.reveal` element became visible.
    Reveal,
    /// A skill category started filling its bars.
    SkillCategory,
    /// A timeline item became visible.
    TimelineItem,
}

/// Which progress fill was updated.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgressKind {
    /// The sidebar scroll-progress bar (fraction in `[0, 1]`).
    Scroll,
    /// The timeline fill (percentage in `[0, 100]`).
    Timeline,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the active nav link changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveLinkEvent {
    /// Previously active link index.
    pub from: Option<usize>,
    /// Newly active link index.
    pub to: usize,
    /// What triggered the change.
    pub cause: ActivationCause,
}

impl From<&ActiveChange> for ActiveLinkEvent {
    fn from(change: &ActiveChange) -> Self {
        Self {
            from: change.from,
            to: change.to,
            cause: change.cause,
        }
    }
}

/// Emitted after the nav indicator is positioned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorEvent {
    /// Link the indicator was placed under.
    pub link: usize,
    /// The computed placement.
    pub placement: IndicatorPlacement,
}

/// Emitted when the pinned-sidebar content offset is applied or cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarOffsetEvent {
    /// Applied offset in CSS pixels, or `None` when cleared.
    pub width: Option<f64>,
}

/// Emitted at the start of each batched frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameFlushEvent {
    /// Zero-based frame counter.
    pub frame_index: u64,
    /// Number of jobs run in this frame.
    pub job_count: usize,
}

impl From<&FrameBatch> for FrameFlushEvent {
    fn from(batch: &FrameBatch) -> Self {
        Self {
            frame_index: batch.frame_index,
            job_count: batch.jobs.len(),
        }
    }
}

/// Emitted when a watched element fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchEvent {
    /// Which behavior fired.
    pub kind: WatchKind,
    /// Index of the element in registration order.
    pub index: usize,
}

/// Emitted when an image's fallback source is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackEvent {
    /// Index of the image in document order.
    pub index: usize,
    /// Whether the built-in placeholder was used.
    pub placeholder: bool,
}

/// Emitted whenever a progress fill is rewritten.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressEvent {
    /// Which fill.
    pub kind: ProgressKind,
    /// The value written.
    pub value: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the page behaviors.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the active nav link changes.
    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        _ = e;
    }

    /// Called after the nav indicator is positioned.
    fn on_indicator(&mut self, e: &IndicatorEvent) {
        _ = e;
    }

    /// Called when the sidebar offset is applied or cleared.
    fn on_sidebar_offset(&mut self, e: &SidebarOffsetEvent) {
        _ = e;
    }

    /// Called at the start of each batched frame.
    fn on_frame_flush(&mut self, e: &FrameFlushEvent) {
        _ = e;
    }

    /// Called when a watched element fires.
    fn on_watch(&mut self, e: &WatchEvent) {
        _ = e;
    }

    /// Called when an image fallback is applied.
    fn on_fallback(&mut self, e: &FallbackEvent) {
        _ = e;
    }

    /// Called when a progress fill is rewritten (requires `trace-rich`).
    #[cfg(feature = "trace-rich")]
    fn on_progress(&mut self, e: &ProgressEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`ActiveLinkEvent`].
    #[inline]
    pub fn active_link(&mut self, e: &ActiveLinkEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_active_link(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IndicatorEvent`].
    #[inline]
    pub fn indicator(&mut self, e: &IndicatorEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_indicator(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SidebarOffsetEvent`].
    #[inline]
    pub fn sidebar_offset(&mut self, e: &SidebarOffsetEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_sidebar_offset(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameFlushEvent`].
    #[inline]
    pub fn frame_flush(&mut self, e: &FrameFlushEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_flush(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`WatchEvent`].
    #[inline]
    pub fn watch(&mut self, e: &WatchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_watch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FallbackEvent`].
    #[inline]
    pub fn fallback(&mut self, e: &FallbackEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_fallback(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ProgressEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn progress(&mut self, e: &ProgressEvent) {
        if let Some(s) = &mut self.sink {
            s.on_progress(e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coalesce::FrameJob;
    use alloc::vec;

    #[test]
    fn active_link_event_from_change() {
        let change = ActiveChange {
            from: Some(0),
            to: 2,
            cause: ActivationCause::Scroll,
        };
        let evt = ActiveLinkEvent::from(&change);
        assert_eq!(evt.from, Some(0));
        assert_eq!(evt.to, 2);
        assert_eq!(evt.cause, ActivationCause::Scroll);
    }

    #[test]
    fn frame_flush_event_from_batch() {
        let batch = FrameBatch {
            frame_index: 9,
            jobs: vec![FrameJob::ActiveSection, FrameJob::Timeline],
        };
        let evt = FrameFlushEvent::from(&batch);
        assert_eq!(evt.frame_index, 9);
        assert_eq!(evt.job_count, 2);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_watch(&WatchEvent {
            kind: WatchKind::Reveal,
            index: 0,
        });
        sink.on_fallback(&FallbackEvent {
            index: 0,
            placeholder: true,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.sidebar_offset(&SidebarOffsetEvent { width: None });
        tracer.frame_flush(&FrameFlushEvent {
            frame_index: 0,
            job_count: 0,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            links: Vec<usize>,
        }
        impl TraceSink for RecordingSink {
            fn on_active_link(&mut self, e: &ActiveLinkEvent) {
                self.links.push(e.to);
            }
        }

        let mut sink = RecordingSink { links: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.active_link(&ActiveLinkEvent {
            from: None,
            to: 3,
            cause: ActivationCause::Initial,
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.links, &[3]);
    }
}
