// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline progress fill and timeline item visibility.

use alloc::rc::Rc;
use alloc::vec::Vec;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use viewsync_core::coalesce::FrameJob;
use viewsync_core::progress::{css_percent, timeline_percent};
use viewsync_core::trace::{WatchEvent, WatchKind};
use viewsync_core::watch::RepeatSet;

use crate::controller::Shared;
use crate::dom;

/// Recomputes the timeline fill from the journey section's position.
pub(crate) fn update(shared: &Shared) {
    let Some(timeline) = shared.timeline.as_ref() else {
        return;
    };
    let scroll_y = dom::scroll_y(&shared.window);
    let section_top = dom::client_rect(&timeline.journey).y0 + scroll_y;
    let percent = timeline_percent(
        section_top,
        f64::from(timeline.journey.offset_height()),
        dom::inner_height(&shared.window),
        scroll_y,
    );
    let _ = timeline
        .fill
        .style()
        .set_property("height", &css_percent(percent));

    #[cfg(feature = "trace-rich")]
    shared.trace(|t| {
        t.progress(&viewsync_core::trace::ProgressEvent {
            kind: viewsync_core::trace::ProgressKind::Timeline,
            value: percent,
        });
    });
}

/// Observes timeline items and keeps the fill in sync with scrolling.
///
/// Does nothing unless the fill, the journey section, and at least one item
/// are all present.
pub(crate) fn install(shared: &Rc<Shared>, items: Vec<HtmlElement>) -> Result<(), JsValue> {
    if shared.timeline.is_none() {
        return Ok(());
    }

    let mut seen = RepeatSet::new(items.len());
    let handle = Rc::clone(shared);
    let class = shared.markup.timeline_item_class;
    let targets = items.clone();
    dom::observe_intersections(
        items,
        &shared.config.timeline_items,
        move |index, is_intersecting, _observer| {
            let first = !seen.has_seen(index);
            if !seen.observe(index, is_intersecting) {
                return;
            }
            if let Some(item) = targets.get(index) {
                dom::add_class(item, class);
            }
            if first {
                handle.trace(|t| {
                    t.watch(&WatchEvent {
                        kind: WatchKind::TimelineItem,
                        index,
                    });
                });
            }
        },
    )?;

    for event in ["scroll", "resize"] {
        let handle = Rc::clone(shared);
        dom::listen_passive(&shared.window, event, move |_| {
            handle.frames.request(FrameJob::Timeline);
        })?;
    }

    update(shared);
    Ok(())
}
