// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nav indicator placement.
//!
//! The indicator is a decorative bar that follows the active nav link. Its
//! position is recomputed from scratch on every active-link change from two
//! viewport-space rectangles: the nav container and the active link.

use alloc::format;
use alloc::string::String;

use kurbo::{Rect, Vec2};

use crate::config::IndicatorConfig;

/// Where and how wide to draw the nav indicator, relative to the nav
/// container's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorPlacement {
    /// Indicator width in CSS pixels.
    pub width: f64,
    /// Translation from the container origin.
    pub offset: Vec2,
}

impl IndicatorPlacement {
    /// CSS `width` value.
    #[must_use]
    pub fn css_width(&self) -> String {
        format!("{}px", self.width)
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.offset.x, self.offset.y)
    }
}

/// Computes the indicator placement for `link` inside `nav`.
///
/// `indicator_height` is the indicator's measured height; zero falls back to
/// [`IndicatorConfig::fallback_height`]. The vertical offset centers the link
/// and then moves up by one full indicator height.
#[must_use]
pub fn indicator_placement(
    nav: Rect,
    link: Rect,
    indicator_height: f64,
    cfg: &IndicatorConfig,
) -> IndicatorPlacement {
    let height = if indicator_height > 0.0 {
        indicator_height
    } else {
        cfg.fallback_height
    };
    let width = (link.width() + cfg.extra_width).max(cfg.min_width);
    let x = link.x0 - nav.x0 - cfg.extra_width / cfg.offset_divisor;
    let y = link.y0 - nav.y0 + link.height() / 2.0 - height;
    IndicatorPlacement {
        width,
        offset: Vec2::new(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewSyncConfig;

    fn cfg() -> IndicatorConfig {
        ViewSyncConfig::portfolio().indicator
    }

    #[test]
    fn placement_follows_link() {
        let nav = Rect::new(10.0, 100.0, 210.0, 500.0);
        let link = Rect::new(30.0, 160.0, 130.0, 200.0);
        let p = indicator_placement(nav, link, 4.0, &cfg());

        assert_eq!(p.width, 120.0);
        let expected_x = 20.0 - 20.0 / 0.71;
        assert!((p.offset.x - expected_x).abs() < 1e-9);
        // 60 from the top, +20 to the center, -4 for the indicator itself.
        assert_eq!(p.offset.y, 76.0);
    }

    #[test]
    fn zero_height_uses_fallback() {
        let nav = Rect::new(0.0, 0.0, 200.0, 400.0);
        let link = Rect::new(0.0, 0.0, 50.0, 30.0);
        let p = indicator_placement(nav, link, 0.0, &cfg());
        assert_eq!(p.offset.y, 12.0);
    }

    #[test]
    fn width_never_below_minimum() {
        let mut c = cfg();
        c.extra_width = -100.0;
        let nav = Rect::ZERO;
        let link = Rect::new(0.0, 0.0, 10.0, 10.0);
        let p = indicator_placement(nav, link, 3.0, &c);
        assert_eq!(p.width, 1.0);
    }

    #[test]
    fn css_values() {
        let p = IndicatorPlacement {
            width: 88.5,
            offset: Vec2::new(-8.0, 12.0),
        };
        assert_eq!(p.css_width(), "88.5px");
        assert_eq!(p.css_transform(), "translate(-8px, 12px)");
    }
}
