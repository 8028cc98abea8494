// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-independent logic for scroll-synchronized page behaviors.
//!
//! `viewsync_core` owns every decision a portfolio page makes while the user
//! scrolls, clicks and resizes: which section is active, where the nav
//! indicator sits, how far the progress bars are filled, which watched
//! elements have fired, and which deferred jobs run in the next frame. It is
//! `no_std` compatible (with `alloc`) and never touches the DOM; the web
//! backend measures the page, calls into this crate, and writes the results
//! back.
//!
//! # Architecture
//!
//! ```text
//!   scroll / resize / click / intersection events
//!       │
//!       ▼
//!   FrameCoalescer::request() ──► (one frame callback per quantum)
//!                                           │
//!                 ┌─────────────────────────┘
//!                 ▼
//!   FrameCoalescer::flush() ──► FrameBatch ──► NavTracker / progress / sidebar
//!                                                    │
//!                 ┌──────────────────────────────────┘
//!                 ▼
//!   DOM writes (class lists, inline styles, history fragment)
//! ```
//!
//! **[`coalesce`]** — Frame batching via `understory_dirty`. Any number of
//! requests for the same job within one frame run it once.
//!
//! **[`nav`]** — Active-link state machine, link target resolution, and
//! click handling.
//!
//! **[`sections`]** — Active-section selection from section tops and the
//! viewport anchor.
//!
//! **[`geometry`]** — Nav indicator placement from bounding rectangles.
//!
//! **[`sidebar`]** — Responsive content offset for the pinned sidebar.
//!
//! **[`progress`]** — Scroll-progress fraction and timeline percentage.
//!
//! **[`watch`]** — One-shot observer lifecycles for reveal and skill
//! animations.
//!
//! **[`skills`]** — Skill-bar target capture and stagger schedule.
//!
//! **[`fallback`]** — Image fallback source policy and placeholder graphic.
//!
//! **[`config`]** — Tuned constants and markup conventions.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-update
//!   progress events, which fire on every scroll.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod coalesce;
pub mod config;
pub mod fallback;
pub mod geometry;
pub mod nav;
pub mod progress;
pub mod sections;
pub mod sidebar;
pub mod skills;
pub mod trace;
pub mod watch;
