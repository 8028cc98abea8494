// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call-to-action press feedback.

use alloc::rc::Rc;

use wasm_bindgen::prelude::*;

use viewsync_core::skills::delay_millis;

use crate::controller::Shared;
use crate::{dom, raf};

/// Adds the pressed class on click and removes it after a short pulse.
pub(crate) fn install(shared: &Rc<Shared>) -> Result<(), JsValue> {
    let Some(button) = dom::by_id(&shared.document, shared.markup.cta_id) else {
        return Ok(());
    };
    let class = shared.markup.cta_pressed_class;
    let pulse = delay_millis(shared.config.cta_pulse);
    let target = button.clone();
    dom::listen(&button, "click", move |_| {
        dom::add_class(&target, class);
        let target = target.clone();
        raf::after_millis(pulse, move || dom::remove_class(&target, class));
    })
}
