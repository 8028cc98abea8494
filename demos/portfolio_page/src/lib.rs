// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-page portfolio driven by `viewsync_backend_web`.
//!
//! Every behavior is declared in `index.html` through classes, ids and
//! `data-*` attributes; this crate only installs the controller. Append
//! `?trace` to the URL to log behavior events to the console, or
//! `?trace=frames` to include per-frame flushes.
//!
//! Build with: `wasm-pack build --target web demos/portfolio_page`
//! Then serve `demos/portfolio_page/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;

use viewsync_backend_web::{ConsoleSink, ViewSyncController};
use viewsync_core::config::{Markup, ViewSyncConfig};
use viewsync_core::trace::{NoopSink, TraceSink};
use wasm_bindgen::prelude::*;

/// Picks a trace sink from the page's query string.
fn sink_for(search: &str) -> Box<dyn TraceSink> {
    let query = search.trim_start_matches('?');
    if query.split('&').any(|pair| pair == "trace=frames") {
        Box::new(ConsoleSink::verbose())
    } else if query.split('&').any(|pair| pair == "trace") {
        Box::new(ConsoleSink::new())
    } else {
        Box::new(NoopSink)
    }
}

/// Installs the controller on page load.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let search = window.location().search().unwrap_or_default();

    let controller = ViewSyncController::install(
        window,
        ViewSyncConfig::portfolio(),
        Markup::portfolio(),
        sink_for(&search),
    )?;
    // Listeners keep the shared state alive; the handle itself is not needed.
    drop(controller);
    Ok(())
}
