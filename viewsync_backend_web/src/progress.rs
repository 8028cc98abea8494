// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidebar scroll-progress bar.
//!
//! Recomputed directly on every scroll and resize event. The computation is
//! O(1), so it skips frame batching.

use alloc::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use viewsync_core::progress::{css_scale_y, scroll_fraction};

use crate::controller::Shared;
use crate::dom;

fn update(shared: &Shared, fill: &HtmlElement) {
    let Some(root) = shared.document.document_element() else {
        return;
    };
    let fraction = scroll_fraction(
        f64::from(root.scroll_top()),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    );
    let _ = fill.style().set_property("transform", &css_scale_y(fraction));

    #[cfg(feature = "trace-rich")]
    shared.trace(|t| {
        t.progress(&viewsync_core::trace::ProgressEvent {
            kind: viewsync_core::trace::ProgressKind::Scroll,
            value: fraction,
        });
    });
}

/// Renders the progress fill now and on every scroll and resize.
pub(crate) fn install(shared: &Rc<Shared>) -> Result<(), JsValue> {
    let Some(fill) = dom::by_id(&shared.document, shared.markup.scroll_progress_id) else {
        return Ok(());
    };
    update(shared, &fill);

    for event in ["scroll", "resize"] {
        let handle = Rc::clone(shared);
        let fill = fill.clone();
        dom::listen_passive(&shared.window, event, move |_| update(&handle, &fill))?;
    }
    Ok(())
}
