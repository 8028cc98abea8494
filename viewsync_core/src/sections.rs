// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section selection.
//!
//! Sections are scanned in document order against an *anchor* line placed a
//! fixed fraction of the viewport below the current scroll offset. The active
//! section is the last one whose top is at or above the anchor.

/// Returns the document-space anchor line for active-section selection.
#[must_use]
pub fn viewport_anchor(scroll_y: f64, viewport_height: f64, anchor_ratio: f64) -> f64 {
    scroll_y + viewport_height * anchor_ratio
}

/// Returns the index of the active section for the given anchor.
///
/// `tops` are the sections' document-space top offsets in document order.
/// The scan stops at the first section below the anchor, so a section out of
/// order never becomes active past a lower one. When no section has reached
/// the anchor the first section is active. Returns `None` only for an empty
/// slice.
#[must_use]
pub fn active_section(tops: &[f64], anchor: f64) -> Option<usize> {
    if tops.is_empty() {
        return None;
    }
    let mut current = 0;
    for (i, &top) in tops.iter().enumerate() {
        if anchor >= top {
            current = i;
        } else {
            break;
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPS: [f64; 3] = [0.0, 500.0, 1200.0];
    const VIEWPORT: f64 = 800.0;

    fn at(scroll_y: f64) -> Option<usize> {
        active_section(&TOPS, viewport_anchor(scroll_y, VIEWPORT, 0.35))
    }

    #[test]
    fn anchor_adds_viewport_fraction() {
        assert_eq!(viewport_anchor(0.0, VIEWPORT, 0.35), 280.0);
        assert_eq!(viewport_anchor(900.0, VIEWPORT, 0.35), 1180.0);
        assert_eq!(viewport_anchor(1600.0, VIEWPORT, 0.35), 1880.0);
    }

    #[test]
    fn picks_last_section_above_anchor() {
        assert_eq!(at(0.0), Some(0));
        assert_eq!(at(900.0), Some(1));
        assert_eq!(at(1600.0), Some(2));
    }

    #[test]
    fn anchor_exactly_on_top_selects_that_section() {
        assert_eq!(active_section(&TOPS, 500.0), Some(1));
    }

    #[test]
    fn defaults_to_first_section() {
        assert_eq!(active_section(&[300.0, 900.0], 10.0), Some(0));
    }

    #[test]
    fn empty_has_no_active_section() {
        assert_eq!(active_section(&[], 1000.0), None);
    }

    #[test]
    fn scan_stops_at_first_lower_section() {
        // The third top is out of order; the scan never reaches it.
        assert_eq!(active_section(&[0.0, 2000.0, 100.0], 500.0), Some(0));
    }
}
