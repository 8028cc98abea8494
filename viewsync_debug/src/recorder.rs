// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, tagged
//! with a sequence number, in arrival order. Behaviors have no common clock
//! (intersection, scroll and frame callbacks fire independently), so the
//! sequence number is the only ordering recorded.

use viewsync_core::trace::{
    ActiveLinkEvent, FallbackEvent, FrameFlushEvent, IndicatorEvent, ProgressEvent,
    SidebarOffsetEvent, TraceSink, WatchEvent,
};

/// One recorded event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_active_link`].
    ActiveLink(ActiveLinkEvent),
    /// See [`TraceSink::on_indicator`].
    Indicator(IndicatorEvent),
    /// See [`TraceSink::on_sidebar_offset`].
    SidebarOffset(SidebarOffsetEvent),
    /// See [`TraceSink::on_frame_flush`].
    FrameFlush(FrameFlushEvent),
    /// See [`TraceSink::on_watch`].
    Watch(WatchEvent),
    /// See [`TraceSink::on_fallback`].
    Fallback(FallbackEvent),
    /// See [`TraceSink::on_progress`].
    Progress(ProgressEvent),
}

impl RecordedEvent {
    /// Short event name, used by the pretty printer and JSON export.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ActiveLink(_) => "ActiveLink",
            Self::Indicator(_) => "Indicator",
            Self::SidebarOffset(_) => "SidebarOffset",
            Self::FrameFlush(_) => "FrameFlush",
            Self::Watch(_) => "Watch",
            Self::Fallback(_) => "Fallback",
            Self::Progress(_) => "Progress",
        }
    }
}

/// A recorded event with its position in the recording.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    /// Zero-based arrival order.
    pub seq: u64,
    /// The event.
    pub event: RecordedEvent,
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    records: Vec<Record>,
    /// Skip [`ProgressEvent`]s, which arrive on every scroll.
    skip_progress: bool,
}

impl RecorderSink {
    /// Creates an empty recorder that keeps every event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty recorder that drops progress events.
    #[must_use]
    pub fn without_progress() -> Self {
        Self {
            records: Vec::new(),
            skip_progress: true,
        }
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops all records. Sequence numbers restart at zero.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn push(&mut self, event: RecordedEvent) {
        let seq = self.records.len() as u64;
        self.records.push(Record { seq, event });
    }
}

impl TraceSink for RecorderSink {
    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        self.push(RecordedEvent::ActiveLink(*e));
    }

    fn on_indicator(&mut self, e: &IndicatorEvent) {
        self.push(RecordedEvent::Indicator(*e));
    }

    fn on_sidebar_offset(&mut self, e: &SidebarOffsetEvent) {
        self.push(RecordedEvent::SidebarOffset(*e));
    }

    fn on_frame_flush(&mut self, e: &FrameFlushEvent) {
        self.push(RecordedEvent::FrameFlush(*e));
    }

    fn on_watch(&mut self, e: &WatchEvent) {
        self.push(RecordedEvent::Watch(*e));
    }

    fn on_fallback(&mut self, e: &FallbackEvent) {
        self.push(RecordedEvent::Fallback(*e));
    }

    fn on_progress(&mut self, e: &ProgressEvent) {
        if !self.skip_progress {
            self.push(RecordedEvent::Progress(*e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewsync_core::nav::ActivationCause;
    use viewsync_core::trace::{ProgressKind, Tracer, WatchKind};

    #[test]
    fn records_in_arrival_order() {
        let mut sink = RecorderSink::new();
        let mut tracer = Tracer::new(&mut sink);
        tracer.active_link(&ActiveLinkEvent {
            from: None,
            to: 0,
            cause: ActivationCause::Initial,
        });
        tracer.watch(&WatchEvent {
            kind: WatchKind::Reveal,
            index: 4,
        });
        drop(tracer);

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq, 0);
        assert_eq!(records[0].event.name(), "ActiveLink");
        assert_eq!(records[1].seq, 1);
        assert_eq!(
            records[1].event,
            RecordedEvent::Watch(WatchEvent {
                kind: WatchKind::Reveal,
                index: 4,
            })
        );
    }

    #[test]
    fn progress_can_be_skipped() {
        let progress = ProgressEvent {
            kind: ProgressKind::Scroll,
            value: 0.5,
        };
        let mut all = RecorderSink::new();
        all.on_progress(&progress);
        assert_eq!(all.len(), 1);

        let mut quiet = RecorderSink::without_progress();
        quiet.on_progress(&progress);
        assert!(quiet.is_empty());
    }

    #[test]
    fn clear_restarts_sequence() {
        let mut sink = RecorderSink::new();
        sink.on_sidebar_offset(&SidebarOffsetEvent { width: None });
        sink.clear();
        sink.on_sidebar_offset(&SidebarOffsetEvent { width: Some(240.0) });
        assert_eq!(sink.into_records()[0].seq, 0);
    }
}
