// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page controller.
//!
//! [`ViewSyncController`] is constructed once per page. It queries the DOM
//! once, installs every behavior whose hooks are present, and owns the state
//! those behaviors share: the nav tracker, the frame scheduler, and the trace
//! sink. Event closures hold `Rc` handles to that state and are leaked with
//! `Closure::forget`, since they live as long as the page.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use viewsync_core::coalesce::{FrameBatch, FrameJob};
use viewsync_core::config::{Markup, ViewSyncConfig};
use viewsync_core::nav::{ActivationCause, NavLink, NavTracker};
use viewsync_core::trace::{FrameFlushEvent, NoopSink, TraceSink, Tracer};

use crate::raf::FrameScheduler;
use crate::{dom, fallback, nav, progress, reveal, skills, timeline};

/// Nav container, its links, and the sections they target.
pub(crate) struct NavView {
    pub(crate) container: HtmlElement,
    pub(crate) links: Vec<HtmlElement>,
    pub(crate) indicator: Option<HtmlElement>,
    pub(crate) sections: Vec<HtmlElement>,
    pub(crate) tracker: NavTracker,
}

/// Elements driving the timeline fill.
pub(crate) struct TimelineView {
    pub(crate) fill: HtmlElement,
    pub(crate) journey: HtmlElement,
}

/// State shared by every behavior and event closure.
pub(crate) struct Shared {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) config: ViewSyncConfig,
    pub(crate) markup: Markup,
    pub(crate) frames: FrameScheduler,
    pub(crate) nav: RefCell<Option<NavView>>,
    pub(crate) sidebar: Option<HtmlElement>,
    pub(crate) timeline: Option<TimelineView>,
    sink: RefCell<Box<dyn TraceSink>>,
}

impl Shared {
    /// Runs `f` with a tracer over the installed sink.
    pub(crate) fn trace(&self, f: impl FnOnce(&mut Tracer<'_>)) {
        let mut sink = self.sink.borrow_mut();
        let mut tracer = Tracer::new(&mut **sink);
        f(&mut tracer);
    }

    /// Runs the jobs of one batched frame.
    fn run_frame(&self, batch: &FrameBatch) {
        self.trace(|t| t.frame_flush(&FrameFlushEvent::from(batch)));
        for &job in &batch.jobs {
            match job {
                FrameJob::SidebarOffset => nav::apply_sidebar_offset(self),
                FrameJob::ActiveSection => nav::update_active_section(self),
                FrameJob::Indicator => nav::place_indicator(self),
                FrameJob::Timeline => timeline::update(self),
            }
        }
    }
}

/// Owns all page behaviors for one document.
///
/// Dropping the controller does not uninstall anything: listeners and
/// observers keep the shared state alive for the page's lifetime.
pub struct ViewSyncController {
    shared: Rc<Shared>,
}

impl core::fmt::Debug for ViewSyncController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewSyncController")
            .field("config", &self.shared.config)
            .field("frames", &self.shared.frames)
            .field("active_link", &self.active_link())
            .finish_non_exhaustive()
    }
}

impl ViewSyncController {
    /// Installs every behavior on the current window's document with the
    /// portfolio defaults and no tracing.
    ///
    /// # Errors
    ///
    /// Fails if there is no global `window` or `document`, or if the browser
    /// rejects a listener or observer registration.
    pub fn install_default() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        Self::install(
            window,
            ViewSyncConfig::portfolio(),
            Markup::portfolio(),
            Box::new(NoopSink),
        )
    }

    /// Installs every behavior whose markup hooks are present.
    ///
    /// Missing optional elements silently disable the matching behavior.
    ///
    /// # Errors
    ///
    /// Fails if the window has no document, or if the browser rejects a
    /// listener or observer registration.
    pub fn install(
        window: Window,
        config: ViewSyncConfig,
        markup: Markup,
        sink: Box<dyn TraceSink>,
    ) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let nav_view = dom::by_id(&document, markup.nav_id).map(|container| {
            let links = dom::query_all(&container, markup.nav_link_selector);
            let tracker = NavTracker::new(
                links
                    .iter()
                    .map(|link| {
                        NavLink::new(
                            link.get_attribute(markup.nav_target_attr).as_deref(),
                            link.get_attribute("href").as_deref(),
                        )
                    })
                    .collect(),
            );
            NavView {
                container,
                links,
                indicator: dom::by_id(&document, markup.indicator_id),
                sections: dom::query_document(&document, markup.section_selector),
                tracker,
            }
        });

        let sidebar = document
            .query_selector(markup.sidebar_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let timeline_items = dom::query_document(&document, markup.timeline_item_selector);
        let timeline = match (
            dom::by_id(&document, markup.timeline_progress_id),
            dom::by_id(&document, markup.journey_id),
        ) {
            (Some(fill), Some(journey)) if !timeline_items.is_empty() => {
                Some(TimelineView { fill, journey })
            }
            _ => None,
        };

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            let frames = FrameScheduler::new(move |batch| {
                if let Some(shared) = weak.upgrade() {
                    shared.run_frame(&batch);
                }
            });
            Shared {
                window,
                document,
                config,
                markup,
                frames,
                nav: RefCell::new(nav_view),
                sidebar,
                timeline,
                sink: RefCell::new(sink),
            }
        });

        fallback::install(&shared)?;
        nav::install_sidebar_offset(&shared)?;
        reveal::install(&shared)?;
        nav::install_links(&shared)?;
        progress::install(&shared)?;
        nav::install_scroll_tracking(&shared)?;
        crate::cta::install(&shared)?;
        timeline::install(&shared, timeline_items)?;
        skills::install(&shared)?;

        Ok(Self { shared })
    }

    /// Makes link `index` the active nav link and re-places the indicator on
    /// the next frame. Out-of-range indices are ignored.
    pub fn set_active_link(&self, index: usize) {
        nav::activate(&self.shared, index, ActivationCause::Click);
    }

    /// Returns the index of the active nav link.
    #[must_use]
    pub fn active_link(&self) -> Option<usize> {
        self.shared
            .nav
            .borrow()
            .as_ref()
            .and_then(|nav| nav.tracker.active())
    }

    /// Schedules `job` for the next frame, coalescing with pending requests.
    pub fn request_update(&self, job: FrameJob) {
        self.shared.frames.request(job);
    }

    /// Runs every pending job immediately rather than on the next frame.
    pub fn flush_frame(&self) {
        self.shared.frames.flush_now();
    }
}
