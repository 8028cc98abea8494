// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM helpers shared by the behaviors.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use viewsync_core::config::ObserverConfig;

/// Returns every element under `root` matching `selector`, in document order.
///
/// Non-`HtmlElement` matches (e.g. SVG) are skipped.
pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Like [`query_all`], rooted at the document.
pub(crate) fn query_document(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .document_element()
        .map(|root| query_all(&root, selector))
        .unwrap_or_default()
}

/// Looks up an element by id.
pub(crate) fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// Returns the viewport-space bounding box of `el`.
pub(crate) fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// Returns the window's vertical scroll offset, or 0 if unavailable.
pub(crate) fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Returns the window's inner height, or 0 if unavailable.
pub(crate) fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Returns the window's inner width, or 0 if unavailable.
pub(crate) fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Adds or removes `class` on `el`.
pub(crate) fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Adds `class` to `el`.
pub(crate) fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

/// Removes `class` from `el`.
pub(crate) fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Registers a passive listener that lives for the page's lifetime.
pub(crate) fn listen_passive(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Registers a listener that lives for the page's lifetime.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Registers a listener that the browser removes after its first call.
pub(crate) fn listen_once(
    target: &EventTarget,
    event: &str,
    f: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let cb = Closure::once_into_js(f);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.unchecked_ref(),
        &options,
    )
}

/// Creates an intersection observer over `targets`.
///
/// `on_entry` receives the index of the entry's target within `targets`,
/// whether it is intersecting, and the observer (to detach one-shot
/// targets). Entries whose target is not in `targets` are dropped.
pub(crate) fn observe_intersections(
    targets: Vec<HtmlElement>,
    options: &ObserverConfig,
    mut on_entry: impl FnMut(usize, bool, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let watched = targets.clone();
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = watched.iter().position(|el| {
                    let el: &Element = el;
                    *el == target
                }) else {
                    continue;
                };
                on_entry(index, entry.is_intersecting(), &observer);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    for el in &targets {
        observer.observe(el);
    }
    Ok(observer)
}
