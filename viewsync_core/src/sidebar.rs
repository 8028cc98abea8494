// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive content offset for the pinned sidebar.

use alloc::format;
use alloc::string::String;

/// The layout offset to apply for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SidebarOffset {
    /// The sidebar is pinned; push content right by this many CSS pixels.
    Pinned(f64),
    /// Below the breakpoint; clear any offset.
    Cleared,
}

impl SidebarOffset {
    /// Returns the CSS length to apply, or `None` when clearing.
    #[must_use]
    pub fn css_value(&self) -> Option<String> {
        match self {
            Self::Pinned(width) => Some(format!("{width}px")),
            Self::Cleared => None,
        }
    }
}

/// Decides the content offset.
///
/// `pinned` is whether the sidebar media query currently matches; the
/// browser evaluates it so zoom and scrollbar rules stay consistent with
/// CSS. `sidebar_width` is the sidebar's measured width.
#[must_use]
pub fn sidebar_offset(pinned: bool, sidebar_width: f64) -> SidebarOffset {
    if pinned {
        SidebarOffset::Pinned(sidebar_width)
    } else {
        SidebarOffset::Cleared
    }
}

/// Returns whether `viewport_width` is at or above `breakpoint`.
///
/// Used when no media query engine is available.
#[must_use]
pub fn is_pinned_width(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width >= breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_above_breakpoint() {
        let pinned = is_pinned_width(1280.0, 1024.0);
        assert_eq!(sidebar_offset(pinned, 264.0), SidebarOffset::Pinned(264.0));
        assert!(is_pinned_width(1024.0, 1024.0));
    }

    #[test]
    fn cleared_below_breakpoint() {
        let pinned = is_pinned_width(800.0, 1024.0);
        assert_eq!(sidebar_offset(pinned, 264.0), SidebarOffset::Cleared);
    }

    #[test]
    fn css_value() {
        assert_eq!(
            SidebarOffset::Pinned(264.5).css_value().as_deref(),
            Some("264.5px")
        );
        assert_eq!(SidebarOffset::Cleared.css_value(), None);
    }
}
