// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidebar nav tracker: active link, indicator, and responsive offset.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use wasm_bindgen::prelude::*;
use web_sys::{
    Event, HtmlElement, ResizeObserver, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use viewsync_core::coalesce::FrameJob;
use viewsync_core::geometry::indicator_placement;
use viewsync_core::nav::{ActivationCause, ActiveChange, ClickOutcome};
use viewsync_core::sections::{active_section, viewport_anchor};
use viewsync_core::sidebar::{SidebarOffset, is_pinned_width, sidebar_offset};
use viewsync_core::trace::{ActiveLinkEvent, IndicatorEvent, SidebarOffsetEvent};

use crate::controller::Shared;
use crate::{dom, raf};

/// Applies `change` to the link elements and schedules the indicator.
fn apply_change(shared: &Shared, change: &ActiveChange) {
    {
        let nav = shared.nav.borrow();
        let Some(nav) = nav.as_ref() else {
            return;
        };
        for (i, link) in nav.links.iter().enumerate() {
            dom::toggle_class(link, shared.markup.active_class, i == change.to);
            let _ = link.remove_attribute("aria-current");
        }
        if let Some(link) = nav.links.get(change.to) {
            let _ = link.set_attribute("aria-current", "page");
        }
    }
    shared.trace(|t| t.active_link(&ActiveLinkEvent::from(change)));
    shared.frames.request(FrameJob::Indicator);
}

/// Makes link `index` active.
pub(crate) fn activate(shared: &Shared, index: usize, cause: ActivationCause) {
    let change = shared
        .nav
        .borrow_mut()
        .as_mut()
        .and_then(|nav| nav.tracker.set_active(index, cause));
    if let Some(change) = change {
        apply_change(shared, &change);
    }
}

/// Re-selects the active section from the scroll position.
pub(crate) fn update_active_section(shared: &Shared) {
    let change = {
        let mut nav = shared.nav.borrow_mut();
        let Some(nav) = nav.as_mut() else {
            return;
        };
        if nav.sections.is_empty() || nav.tracker.is_empty() {
            return;
        }
        let tops: Vec<f64> = nav
            .sections
            .iter()
            .map(|section| f64::from(section.offset_top()))
            .collect();
        let anchor = viewport_anchor(
            dom::scroll_y(&shared.window),
            dom::inner_height(&shared.window),
            shared.config.anchor_ratio,
        );
        let Some(current) = active_section(&tops, anchor) else {
            return;
        };
        let id = nav.sections[current].id();
        nav.tracker.sync_to_section(&id)
    };
    if let Some(change) = change {
        apply_change(shared, &change);
    }
}

/// Measures the active link and positions the indicator under it.
pub(crate) fn place_indicator(shared: &Shared) {
    let event = {
        let nav = shared.nav.borrow();
        let Some(nav) = nav.as_ref() else {
            return;
        };
        let (Some(indicator), Some(active)) = (nav.indicator.as_ref(), nav.tracker.active())
        else {
            return;
        };
        let Some(link) = nav.links.get(active) else {
            return;
        };

        let placement = indicator_placement(
            dom::client_rect(&nav.container),
            dom::client_rect(link),
            f64::from(indicator.offset_height()),
            &shared.config.indicator,
        );
        let s = indicator.style();
        let _ = s.set_property("opacity", "1");
        let _ = s.set_property("width", &placement.css_width());
        let _ = s.set_property("transform", &placement.css_transform());
        IndicatorEvent {
            link: active,
            placement,
        }
    };
    shared.trace(|t| t.indicator(&event));
}

/// Wires click handling on every nav link and activates the initial link on
/// the next frame.
pub(crate) fn install_links(shared: &Rc<Shared>) -> Result<(), JsValue> {
    let (links, initial): (Vec<HtmlElement>, Option<usize>) = {
        let nav = shared.nav.borrow();
        let Some(nav) = nav.as_ref() else {
            return Ok(());
        };
        let hash = shared.window.location().hash().unwrap_or_default();
        (nav.links.clone(), nav.tracker.initial_link(&hash))
    };

    for (index, link) in links.iter().enumerate() {
        let shared = Rc::clone(shared);
        dom::listen(link, "click", move |event: Event| {
            on_click(&shared, index, &event);
        })?;
    }

    if let Some(initial) = initial {
        let shared = Rc::clone(shared);
        raf::next_frame(move || activate(&shared, initial, ActivationCause::Initial));
    }
    Ok(())
}

fn on_click(shared: &Shared, index: usize, event: &Event) {
    let outcome = {
        let mut nav = shared.nav.borrow_mut();
        let Some(nav) = nav.as_mut() else {
            return;
        };
        let document = &shared.document;
        nav.tracker
            .click(index, |id| document.get_element_by_id(id).is_some())
    };
    let ClickOutcome::Navigate {
        target_id,
        fragment,
        change,
    } = outcome
    else {
        return;
    };

    event.prevent_default();
    apply_change(shared, &change);

    if let Some(target) = shared.document.get_element_by_id(&target_id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    if let Ok(history) = shared.window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&fragment));
    }
}

/// Runs one active-section sync now and re-runs it, batched, on every scroll
/// and resize.
pub(crate) fn install_scroll_tracking(shared: &Rc<Shared>) -> Result<(), JsValue> {
    if shared.nav.borrow().is_none() {
        return Ok(());
    }
    update_active_section(shared);

    for event in ["scroll", "resize"] {
        let handle = Rc::clone(shared);
        dom::listen_passive(&shared.window, event, move |_| {
            handle.frames.request(FrameJob::ActiveSection);
        })?;
    }
    Ok(())
}

/// Pins or clears the content offset for the current viewport.
pub(crate) fn apply_sidebar_offset(shared: &Shared) {
    let Some(sidebar) = shared.sidebar.as_ref() else {
        return;
    };
    let pinned = shared
        .window
        .match_media(&shared.config.sidebar_media_query())
        .ok()
        .flatten()
        .map_or_else(
            || {
                is_pinned_width(
                    dom::inner_width(&shared.window),
                    shared.config.sidebar_breakpoint,
                )
            },
            |query| query.matches(),
        );
    let offset = sidebar_offset(pinned, dom::client_rect(sidebar).width());

    let root = shared
        .document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let body = shared.document.body();
    let property = shared.markup.sidebar_width_property;
    match offset.css_value() {
        Some(value) => {
            if let Some(root) = &root {
                let _ = root.style().set_property(property, &value);
            }
            if let Some(body) = &body {
                let _ = body.style().set_property("padding-left", &value);
            }
        }
        None => {
            if let Some(root) = &root {
                let _ = root.style().remove_property(property);
            }
            if let Some(body) = &body {
                let _ = body.style().remove_property("padding-left");
            }
        }
    }

    let width = match offset {
        SidebarOffset::Pinned(width) => Some(width),
        SidebarOffset::Cleared => None,
    };
    shared.trace(|t| t.sidebar_offset(&SidebarOffsetEvent { width }));

    let has_active = shared
        .nav
        .borrow()
        .as_ref()
        .is_some_and(|nav| nav.tracker.active().is_some());
    if has_active {
        shared.frames.request(FrameJob::Indicator);
    }
}

/// Keeps the content offset in sync with the viewport and the sidebar's own
/// size.
pub(crate) fn install_sidebar_offset(shared: &Rc<Shared>) -> Result<(), JsValue> {
    let Some(sidebar) = shared.sidebar.clone() else {
        return Ok(());
    };
    shared.frames.request(FrameJob::SidebarOffset);

    let on_resize = Rc::clone(shared);
    dom::listen_passive(&shared.window, "resize", move |_| {
        on_resize.frames.request(FrameJob::SidebarOffset);
    })?;

    // Older browsers lack ResizeObserver; window resizes still apply.
    let on_sidebar = Rc::clone(shared);
    let cb = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
        on_sidebar.frames.request(FrameJob::SidebarOffset);
    }) as Box<dyn FnMut(js_sys::Array)>);
    if let Ok(observer) = ResizeObserver::new(cb.as_ref().unchecked_ref()) {
        observer.observe(&sidebar);
        cb.forget();
    }
    Ok(())
}
