// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` batching.
//!
//! [`FrameScheduler`] binds a [`FrameCoalescer`] to the browser's frame
//! callback. The first [`request`](FrameScheduler::request) after a flush
//! registers one `requestAnimationFrame` callback; every other request until
//! that callback runs is absorbed. When the frame arrives the coalescer is
//! flushed and the handler receives the [`FrameBatch`].
//!
//! The JS closure is created once and re-registered for each frame that is
//! actually needed, so an idle page schedules nothing.
//!
//! [`FrameCoalescer`]: viewsync_core::coalesce::FrameCoalescer

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use viewsync_core::coalesce::{FrameBatch, FrameCoalescer, FrameJob};

// Global bindings; no `Window` lookup per request.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, millis: i32) -> i32;
}

/// Runs `f` once on the next animation frame.
pub(crate) fn next_frame(f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(move |_timestamp_ms: f64| f());
    request_animation_frame(&callback);
}

/// Runs `f` once after `millis` milliseconds.
pub(crate) fn after_millis(millis: i32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    set_timeout(&callback, millis);
}

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Coalesces [`FrameJob`] requests into at most one frame callback per
/// rendered frame.
///
/// Cloning is cheap and yields a handle to the same scheduler.
#[derive(Clone)]
pub struct FrameScheduler {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Stored in its own `RefCell` so the frame body can re-register it
    /// without conflicting with `handler`.
    closure: RefCell<Option<FrameClosure>>,

    /// Dirty jobs and the pending flag.
    coalescer: RefCell<FrameCoalescer>,

    /// Receives each flushed batch.
    handler: RefCell<Box<dyn FnMut(FrameBatch)>>,

    /// The ID of the outstanding `requestAnimationFrame` call, if any.
    raf_id: Cell<Option<i32>>,
}

impl FrameScheduler {
    /// Creates a scheduler that passes each frame's batch to `handler`.
    ///
    /// Nothing is scheduled until the first [`request`](Self::request).
    pub fn new(handler: impl FnMut(FrameBatch) + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            closure: RefCell::new(None),
            coalescer: RefCell::new(FrameCoalescer::new()),
            handler: RefCell::new(Box::new(handler)),
            raf_id: Cell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.raf_id.set(None);

            // The coalescer borrow ends before the handler runs, so jobs may
            // request follow-up work for the next frame.
            let batch = inner.coalescer.borrow_mut().flush();
            inner.handler.borrow_mut()(batch);
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// Marks `job` dirty, scheduling a frame callback if none is pending.
    pub fn request(&self, job: FrameJob) {
        if !self.inner.coalescer.borrow_mut().request(job) {
            return;
        }
        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(Some(id));
        }
    }

    /// Runs the pending batch now instead of on the next frame.
    ///
    /// Cancels the outstanding frame callback. Does nothing when called from
    /// inside a frame's handler.
    pub fn flush_now(&self) {
        let Ok(mut handler) = self.inner.handler.try_borrow_mut() else {
            return;
        };
        if let Some(id) = self.inner.raf_id.take() {
            cancel_animation_frame(id);
        }
        let batch = self.inner.coalescer.borrow_mut().flush();
        handler(batch);
    }

    /// Returns `true` while a frame callback is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.coalescer.borrow().is_pending()
    }
}

impl Drop for FrameInner {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            cancel_animation_frame(id);
        }
    }
}

impl core::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("coalescer", &*self.inner.coalescer.borrow())
            .field("raf_id", &self.inner.raf_id.get())
            .finish_non_exhaustive()
    }
}
