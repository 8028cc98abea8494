// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skill-bar fill animation.

use alloc::rc::Rc;
use alloc::vec::Vec;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use viewsync_core::skills::{
    EMPTY_WIDTH, capture_target, delay_millis, fill_schedule, stored_target,
};
use viewsync_core::trace::{WatchEvent, WatchKind};
use viewsync_core::watch::OneShotSet;

use crate::controller::Shared;
use crate::{dom, raf};

/// Stores each bar's inline width as its target and empties the bar.
fn capture(shared: &Shared, fills: &[HtmlElement]) {
    for fill in fills {
        let style = fill.style();
        let inline = style.get_property_value("width").unwrap_or_default();
        let target = capture_target(&inline);
        let _ = fill.set_attribute(shared.markup.skill_width_attr, target.as_str());
        let _ = style.set_property("width", EMPTY_WIDTH);
    }
}

/// Starts each bar's fill after its stagger delay.
fn animate(shared: &Shared, fills: &[HtmlElement]) {
    let markup = shared.markup;
    for (fill, delay) in fills
        .iter()
        .zip(fill_schedule(fills.len(), shared.config.skill_stagger))
    {
        let fill = fill.clone();
        raf::after_millis(delay_millis(delay), move || {
            let target = stored_target(fill.get_attribute(markup.skill_width_attr).as_deref());
            dom::add_class(&fill, markup.skill_animate_class);
            // The class must be applied before the width changes for the
            // transition to run.
            raf::next_frame(move || {
                let _ = fill.style().set_property("width", target.as_str());
            });
        });
    }
}

/// Captures every bar's target and fills each category's bars the first
/// time the category scrolls into view.
pub(crate) fn install(shared: &Rc<Shared>) -> Result<(), JsValue> {
    let categories = dom::query_document(&shared.document, shared.markup.skill_category_selector);
    if categories.is_empty() {
        return Ok(());
    }

    let fills: Vec<Vec<HtmlElement>> = categories
        .iter()
        .map(|category| dom::query_all(category, shared.markup.skill_fill_selector))
        .collect();
    for bars in &fills {
        capture(shared, bars);
    }

    let mut watch = OneShotSet::new(categories.len());
    let targets = categories.clone();
    let handle = Rc::clone(shared);
    dom::observe_intersections(
        categories,
        &shared.config.skills,
        move |index, is_intersecting, observer| {
            if !watch.observe(index, is_intersecting) {
                return;
            }
            if let Some(bars) = fills.get(index) {
                animate(&handle, bars);
            }
            if let Some(category) = targets.get(index) {
                observer.unobserve(category);
            }
            handle.trace(|t| {
                t.watch(&WatchEvent {
                    kind: WatchKind::SkillCategory,
                    index,
                });
            });
        },
    )?;
    Ok(())
}
