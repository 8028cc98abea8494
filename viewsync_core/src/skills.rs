// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skill-bar fill targets and stagger schedule.
//!
//! Each bar's inline width is captured once at load as its target, the bar
//! is reset to `0%`, and when its category first becomes visible the bars
//! fill to their targets one after another.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

/// Width every bar starts from, and the target of bars without one.
pub const EMPTY_WIDTH: &str = "0%";

/// A bar's captured target width, as a CSS length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillTarget(String);

impl SkillTarget {
    /// Returns the CSS width.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Captures a bar's target from its initial inline `width`.
///
/// An empty width means the bar never fills.
#[must_use]
pub fn capture_target(inline_width: &str) -> SkillTarget {
    let width = inline_width.trim();
    if width.is_empty() {
        SkillTarget(String::from(EMPTY_WIDTH))
    } else {
        SkillTarget(String::from(width))
    }
}

/// Reads back a target stored on the bar, falling back to [`EMPTY_WIDTH`].
#[must_use]
pub fn stored_target(stored: Option<&str>) -> SkillTarget {
    capture_target(stored.unwrap_or_default())
}

/// Delay before the bar at `index` starts filling.
#[must_use]
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    step.saturating_mul(index)
}

/// Delays for every bar of a category with `count` bars.
#[must_use]
pub fn fill_schedule(count: usize, step: Duration) -> Vec<Duration> {
    (0..count).map(|i| stagger_delay(i, step)).collect()
}

/// Converts a delay to whole milliseconds for timer APIs.
#[must_use]
pub fn delay_millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}
