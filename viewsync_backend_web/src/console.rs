// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.
//!
//! [`ConsoleSink`] implements [`TraceSink`] and writes one `console.debug`
//! line per event, prefixed with the source tag.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::JsValue;

use viewsync_core::trace::{
    ActiveLinkEvent, FallbackEvent, FrameFlushEvent, IndicatorEvent, SidebarOffsetEvent,
    TraceSink, WatchEvent,
};

/// Writes human-readable trace lines to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also log every frame flush. Off by default; scrolling flushes a
    /// frame per rendered frame.
    pub frames: bool,
}

impl ConsoleSink {
    /// Creates a sink that skips frame flushes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that also logs frame flushes.
    #[must_use]
    pub fn verbose() -> Self {
        Self { frames: true }
    }
}

fn emit(line: &str) {
    web_sys::console::debug_1(&JsValue::from_str(line));
}

pub(crate) fn format_active_link(e: &ActiveLinkEvent) -> String {
    match e.from {
        Some(from) => format!("[nav] active {from} -> {} ({:?})", e.to, e.cause),
        None => format!("[nav] active {} ({:?})", e.to, e.cause),
    }
}

pub(crate) fn format_indicator(e: &IndicatorEvent) -> String {
    format!(
        "[nav] indicator link={} width={:.1} at=({:.1}, {:.1})",
        e.link, e.placement.width, e.placement.offset.x, e.placement.offset.y
    )
}

pub(crate) fn format_sidebar_offset(e: &SidebarOffsetEvent) -> String {
    match e.width {
        Some(width) => format!("[sidebar] pinned width={width:.1}px"),
        None => String::from("[sidebar] cleared"),
    }
}

pub(crate) fn format_watch(e: &WatchEvent) -> String {
    format!("[watch] {:?} #{} fired", e.kind, e.index)
}

pub(crate) fn format_fallback(e: &FallbackEvent) -> String {
    let source = if e.placeholder { "placeholder" } else { "attribute" };
    format!("[image] #{} fallback from {source}", e.index)
}

impl TraceSink for ConsoleSink {
    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        emit(&format_active_link(e));
    }

    fn on_indicator(&mut self, e: &IndicatorEvent) {
        emit(&format_indicator(e));
    }

    fn on_sidebar_offset(&mut self, e: &SidebarOffsetEvent) {
        emit(&format_sidebar_offset(e));
    }

    fn on_frame_flush(&mut self, e: &FrameFlushEvent) {
        if self.frames {
            emit(&format!("[frame] {} jobs={}", e.frame_index, e.job_count));
        }
    }

    fn on_watch(&mut self, e: &WatchEvent) {
        emit(&format_watch(e));
    }

    fn on_fallback(&mut self, e: &FallbackEvent) {
        emit(&format_fallback(e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use viewsync_core::geometry::IndicatorPlacement;
    use viewsync_core::nav::ActivationCause;
    use viewsync_core::trace::WatchKind;

    #[test]
    fn active_link_lines() {
        let initial = ActiveLinkEvent {
            from: None,
            to: 0,
            cause: ActivationCause::Initial,
        };
        assert_eq!(format_active_link(&initial), "[nav] active 0 (Initial)");

        let scrolled = ActiveLinkEvent {
            from: Some(0),
            to: 2,
            cause: ActivationCause::Scroll,
        };
        assert_eq!(format_active_link(&scrolled), "[nav] active 0 -> 2 (Scroll)");
    }

    #[test]
    fn indicator_line() {
        let e = IndicatorEvent {
            link: 1,
            placement: IndicatorPlacement {
                width: 120.0,
                offset: Vec2::new(-8.17, 76.0),
            },
        };
        assert_eq!(
            format_indicator(&e),
            "[nav] indicator link=1 width=120.0 at=(-8.2, 76.0)"
        );
    }

    #[test]
    fn sidebar_lines() {
        assert_eq!(
            format_sidebar_offset(&SidebarOffsetEvent { width: Some(264.0) }),
            "[sidebar] pinned width=264.0px"
        );
        assert_eq!(
            format_sidebar_offset(&SidebarOffsetEvent { width: None }),
            "[sidebar] cleared"
        );
    }

    #[test]
    fn watch_and_fallback_lines() {
        let watch = WatchEvent {
            kind: WatchKind::SkillCategory,
            index: 3,
        };
        assert_eq!(format_watch(&watch), "[watch] SkillCategory #3 fired");
        let fallback = FallbackEvent {
            index: 0,
            placeholder: true,
        };
        assert_eq!(format_fallback(&fallback), "[image] #0 fallback from placeholder");
    }
}
