// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for viewsync.
//!
//! This crate wires the decisions of `viewsync_core` to browser APIs:
//!
//! - [`ViewSyncController`]: installs every page behavior on a document and
//!   owns their shared state
//! - [`FrameScheduler`]: `requestAnimationFrame` batching over a
//!   [`FrameCoalescer`](viewsync_core::coalesce::FrameCoalescer)
//! - [`ConsoleSink`]: a [`TraceSink`](viewsync_core::trace::TraceSink) that
//!   logs to the browser console
//!
//! Behaviors are installed only when their markup hooks exist:
//!
//! | Behavior | Hooks |
//! |---|---|
//! | Image fallback | `img[data-fallback]` |
//! | Reveal on scroll | `.reveal` |
//! | Nav tracker | `#sidebar-nav`, `.nav-link`, `[data-section]`, `#sidebar-nav-indicator` |
//! | Responsive offset | `[data-sidebar]` |
//! | Scroll progress | `#sidebar-progress-fill` |
//! | Timeline | `#journey`, `#timeline-progress`, `[data-timeline-item]` |
//! | Skill bars | `.skill-category`, `.skill-item__fill` |
//! | CTA pulse | `#cta` |

#![no_std]

extern crate alloc;

mod console;
mod controller;
mod cta;
mod dom;
mod fallback;
mod nav;
mod progress;
mod raf;
mod reveal;
mod skills;
mod timeline;

pub use console::ConsoleSink;
pub use controller::ViewSyncController;
pub use raf::FrameScheduler;
pub use viewsync_core::coalesce::FrameJob;
