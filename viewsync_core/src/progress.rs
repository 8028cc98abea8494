// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-progress and timeline-progress math.
//!
//! Both functions are pure and O(1). The scroll-progress bar recomputes on
//! every scroll event without batching; the timeline runs once per frame.

use alloc::format;
use alloc::string::String;

/// Returns how far the document is scrolled, in `[0, 1]`.
///
/// The denominator is floored at 1 so a document shorter than its viewport
/// reports 0 instead of dividing by zero or a negative span.
#[must_use]
pub fn scroll_fraction(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let max_scrollable = (scroll_height - client_height).max(1.0);
    (scroll_top / max_scrollable).clamp(0.0, 1.0)
}

/// CSS `transform` value for a vertical fill at `fraction`.
#[must_use]
pub fn css_scale_y(fraction: f64) -> String {
    format!("scaleY({fraction})")
}

/// Returns the timeline fill percentage, in `[0, 100]`.
///
/// The active range starts when the section's top enters the bottom of the
/// viewport (`section_top - viewport_height`) and ends when its bottom passes
/// the top of the document viewport (`section_top + section_height`).
#[must_use]
pub fn timeline_percent(
    section_top: f64,
    section_height: f64,
    viewport_height: f64,
    scroll_y: f64,
) -> f64 {
    let start = section_top - viewport_height;
    let end = section_top + section_height;
    if scroll_y < start {
        return 0.0;
    }
    if scroll_y > end {
        return 100.0;
    }
    let span = end - start;
    if span <= 0.0 {
        return 0.0;
    }
    ((scroll_y - start) / span * 100.0).clamp(0.0, 100.0)
}

/// CSS `height` value for a timeline fill at `percent`.
#[must_use]
pub fn css_percent(percent: f64) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(scroll_fraction(-40.0, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(5000.0, 3000.0, 800.0), 1.0);
        assert_eq!(scroll_fraction(1100.0, 3000.0, 800.0), 0.5);
    }

    #[test]
    fn short_document_reports_zero() {
        assert_eq!(scroll_fraction(0.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn one_pixel_of_scroll_uses_floor() {
        // max_scrollable floors at 1, so the single scrollable pixel reads as full.
        assert_eq!(scroll_fraction(1.0, 801.0, 800.0), 1.0);
    }

    #[test]
    fn scale_css() {
        assert_eq!(css_scale_y(0.25), "scaleY(0.25)");
        assert_eq!(css_scale_y(1.0), "scaleY(1)");
    }

    const TOP: f64 = 2000.0;
    const HEIGHT: f64 = 1000.0;
    const VIEWPORT: f64 = 800.0;

    #[test]
    fn timeline_before_section_is_empty() {
        assert_eq!(timeline_percent(TOP, HEIGHT, VIEWPORT, 0.0), 0.0);
        assert_eq!(timeline_percent(TOP, HEIGHT, VIEWPORT, 1199.0), 0.0);
    }

    #[test]
    fn timeline_after_section_is_full() {
        assert_eq!(timeline_percent(TOP, HEIGHT, VIEWPORT, 3001.0), 100.0);
        assert_eq!(timeline_percent(TOP, HEIGHT, VIEWPORT, 9000.0), 100.0);
    }

    #[test]
    fn timeline_midpoint_is_half() {
        let mid = TOP + HEIGHT / 2.0 - VIEWPORT / 2.0;
        let p = timeline_percent(TOP, HEIGHT, VIEWPORT, mid);
        assert!((p - 50.0).abs() < 1e-9, "got {p}");
    }

    #[test]
    fn timeline_range_edges() {
        assert_eq!(timeline_percent(TOP, HEIGHT, VIEWPORT, 1200.0), 0.0);
        assert_eq!(timeline_percent(TOP, HEIGHT, VIEWPORT, 3000.0), 100.0);
    }

    #[test]
    fn timeline_degenerate_range() {
        assert_eq!(timeline_percent(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn percent_css() {
        assert_eq!(css_percent(42.5), "42.5%");
        assert_eq!(css_percent(0.0), "0%");
    }
}
