// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for viewsync diagnostics.
//!
//! This crate provides [`TraceSink`](viewsync_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — in-memory recording of every event in
//!   arrival order.
//! - [`json::export`] — writes a recording as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;
