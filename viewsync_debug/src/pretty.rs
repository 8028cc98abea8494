// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use viewsync_core::nav::ActivationCause;
use viewsync_core::trace::{
    ActiveLinkEvent, FallbackEvent, FrameFlushEvent, IndicatorEvent, ProgressEvent,
    ProgressKind, SidebarOffsetEvent, TraceSink, WatchEvent, WatchKind,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub(crate) fn cause_name(cause: ActivationCause) -> &'static str {
    match cause {
        ActivationCause::Initial => "initial",
        ActivationCause::Click => "click",
        ActivationCause::Scroll => "scroll",
    }
}

pub(crate) fn watch_name(kind: WatchKind) -> &'static str {
    match kind {
        WatchKind::Reveal => "reveal",
        WatchKind::SkillCategory => "skills",
        WatchKind::TimelineItem => "timeline",
    }
}

pub(crate) fn progress_name(kind: ProgressKind) -> &'static str {
    match kind {
        ProgressKind::Scroll => "scroll",
        ProgressKind::Timeline => "timeline",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        let from = e.from.map_or_else(|| "-".to_owned(), |i| i.to_string());
        let _ = writeln!(
            self.writer,
            "[nav] link {from} -> {} ({})",
            e.to,
            cause_name(e.cause),
        );
    }

    fn on_indicator(&mut self, e: &IndicatorEvent) {
        let _ = writeln!(
            self.writer,
            "[indicator] link={} width={:.1}px at ({:.1}, {:.1})",
            e.link, e.placement.width, e.placement.offset.x, e.placement.offset.y,
        );
    }

    fn on_sidebar_offset(&mut self, e: &SidebarOffsetEvent) {
        match e.width {
            Some(width) => {
                let _ = writeln!(self.writer, "[sidebar] pinned width={width:.1}px");
            }
            None => {
                let _ = writeln!(self.writer, "[sidebar] cleared");
            }
        }
    }

    fn on_frame_flush(&mut self, e: &FrameFlushEvent) {
        let _ = writeln!(
            self.writer,
            "[frame] index={} jobs={}",
            e.frame_index, e.job_count,
        );
    }

    fn on_watch(&mut self, e: &WatchEvent) {
        let _ = writeln!(
            self.writer,
            "[watch] {} index={}",
            watch_name(e.kind),
            e.index,
        );
    }

    fn on_fallback(&mut self, e: &FallbackEvent) {
        let source = if e.placeholder { "placeholder" } else { "custom" };
        let _ = writeln!(
            self.writer,
            "[fallback] image={} source={source}",
            e.index,
        );
    }

    fn on_progress(&mut self, e: &ProgressEvent) {
        let _ = writeln!(
            self.writer,
            "[progress] {} value={:.3}",
            progress_name(e.kind),
            e.value,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use viewsync_core::geometry::IndicatorPlacement;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_active_link() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_active_link(&ActiveLinkEvent {
            from: None,
            to: 2,
            cause: ActivationCause::Click,
        });
        let output = output(sink);
        assert_eq!(output, "[nav] link - -> 2 (click)\n");
    }

    #[test]
    fn pretty_print_indicator() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_indicator(&IndicatorEvent {
            link: 1,
            placement: IndicatorPlacement {
                width: 100.0,
                offset: Vec2::new(40.0, 37.0),
            },
        });
        let output = output(sink);
        assert!(output.contains("[indicator]"), "got: {output}");
        assert!(output.contains("width=100.0px"), "got: {output}");
        assert!(output.contains("(40.0, 37.0)"), "got: {output}");
    }

    #[test]
    fn pretty_print_sidebar_states() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_sidebar_offset(&SidebarOffsetEvent { width: Some(280.0) });
        sink.on_sidebar_offset(&SidebarOffsetEvent { width: None });
        let output = output(sink);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, ["[sidebar] pinned width=280.0px", "[sidebar] cleared"]);
    }

    #[test]
    fn pretty_print_watch_and_fallback() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_watch(&WatchEvent {
            kind: WatchKind::SkillCategory,
            index: 3,
        });
        sink.on_fallback(&FallbackEvent {
            index: 0,
            placeholder: true,
        });
        let output = output(sink);
        assert!(output.contains("[watch] skills index=3"), "got: {output}");
        assert!(
            output.contains("[fallback] image=0 source=placeholder"),
            "got: {output}"
        );
    }
}
