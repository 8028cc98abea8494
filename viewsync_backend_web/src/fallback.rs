// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image fallback substitution.

use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use viewsync_core::fallback::{FALLBACK_IMAGE_DATA, FallbackSlot, is_broken};
use viewsync_core::trace::FallbackEvent;

use crate::controller::Shared;
use crate::dom;

/// Swaps in the fallback source at most once and drops the opt-in
/// attribute.
fn apply(shared: &Shared, img: &HtmlImageElement, slot: &RefCell<FallbackSlot>, index: usize) {
    let Some(src) = slot.borrow_mut().apply() else {
        return;
    };
    img.set_src(&src);
    let _ = img.remove_attribute(shared.markup.fallback_attr);
    shared.trace(|t| {
        t.fallback(&FallbackEvent {
            index,
            placeholder: src == FALLBACK_IMAGE_DATA,
        });
    });
}

/// Arms every opted-in image, fixing the ones that already failed.
pub(crate) fn install(shared: &Rc<Shared>) -> Result<(), JsValue> {
    let images = dom::query_document(&shared.document, shared.markup.fallback_selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok());

    for (index, img) in images.enumerate() {
        let attr = img.get_attribute(shared.markup.fallback_attr);
        let slot = Rc::new(RefCell::new(FallbackSlot::arm(attr.as_deref())));

        let handle = Rc::clone(shared);
        let on_error_img = img.clone();
        let on_error_slot = Rc::clone(&slot);
        dom::listen_once(&img, "error", move || {
            apply(&handle, &on_error_img, &on_error_slot, index);
        })?;

        if is_broken(img.complete(), img.natural_width()) {
            apply(shared, &img, &slot, index);
        }
    }
    Ok(())
}
