// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal-on-scroll.

use alloc::rc::Rc;

use wasm_bindgen::prelude::*;

use viewsync_core::trace::{WatchEvent, WatchKind};
use viewsync_core::watch::OneShotSet;

use crate::controller::Shared;
use crate::dom;

/// Reveals each flagged element the first time enough of it is visible,
/// then stops observing it.
pub(crate) fn install(shared: &Rc<Shared>) -> Result<(), JsValue> {
    let elements = dom::query_document(&shared.document, shared.markup.reveal_selector);
    if elements.is_empty() {
        return Ok(());
    }

    let mut watch = OneShotSet::new(elements.len());
    let targets = elements.clone();
    let handle = Rc::clone(shared);
    dom::observe_intersections(
        elements,
        &shared.config.reveal,
        move |index, is_intersecting, observer| {
            if !watch.observe(index, is_intersecting) {
                return;
            }
            let Some(el) = targets.get(index) else {
                return;
            };
            dom::add_class(el, handle.markup.reveal_class);
            observer.unobserve(el);
            handle.trace(|t| {
                t.watch(&WatchEvent {
                    kind: WatchKind::Reveal,
                    index,
                });
            });
        },
    )?;
    Ok(())
}
