// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuned constants and markup conventions.
//!
//! [`ViewSyncConfig`] carries every numeric constant the behaviors use, and
//! [`Markup`] names the selectors, attributes and classes the page author
//! relies on. Both are plain `Copy` data; nothing is read from files or the
//! environment.

use core::time::Duration;

/// Constants for nav indicator placement.
///
/// See [`indicator_placement`](crate::geometry::indicator_placement).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorConfig {
    /// Added to the link width to get the indicator width, in CSS pixels.
    pub extra_width: f64,
    /// Divides `extra_width` to get the leftward shift of the indicator.
    ///
    /// Tuned visually; `0.71` moves the indicator about 28px left of the link.
    pub offset_divisor: f64,
    /// Indicator height used when the element reports a height of zero.
    pub fallback_height: f64,
    /// Lower bound for the indicator width.
    pub min_width: f64,
}

/// Intersection observer options: a visibility threshold and a root margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the target that must be visible (0.0–1.0).
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: &'static str,
}

/// Configuration for the page controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSyncConfig {
    /// Fraction of the viewport height added to `scrollY` to get the anchor
    /// line used for active-section selection.
    pub anchor_ratio: f64,
    /// Observer options for `.reveal` elements.
    pub reveal: ObserverConfig,
    /// Observer options for skill categories.
    pub skills: ObserverConfig,
    /// Observer options for timeline items.
    pub timeline_items: ObserverConfig,
    /// Delay between successive bars within one skill category.
    pub skill_stagger: Duration,
    /// Minimum viewport width (CSS pixels) at which the sidebar is pinned and
    /// the content is offset by its width.
    pub sidebar_breakpoint: f64,
    /// Nav indicator constants.
    pub indicator: IndicatorConfig,
    /// How long the call-to-action button keeps its pressed class.
    pub cta_pulse: Duration,
}

impl ViewSyncConfig {
    /// Default configuration for the portfolio page.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            anchor_ratio: 0.35,
            reveal: ObserverConfig {
                threshold: 0.3,
                root_margin: "0px",
            },
            skills: ObserverConfig {
                threshold: 0.2,
                root_margin: "0px 0px -50px 0px",
            },
            timeline_items: ObserverConfig {
                threshold: 0.2,
                root_margin: "-50px 0px",
            },
            skill_stagger: Duration::from_millis(100),
            sidebar_breakpoint: 1024.0,
            indicator: IndicatorConfig {
                extra_width: 20.0,
                offset_divisor: 0.71,
                fallback_height: 3.0,
                min_width: 1.0,
            },
            cta_pulse: Duration::from_millis(140),
        }
    }

    /// Returns the media query that matches when the sidebar is pinned.
    #[must_use]
    pub fn sidebar_media_query(&self) -> alloc::string::String {
        alloc::format!("(min-width: {}px)", self.sidebar_breakpoint)
    }
}

impl Default for ViewSyncConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Selectors, attributes and classes shared with the page markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markup {
    /// Elements revealed on scroll.
    pub reveal_selector: &'static str,
    /// Class added to revealed elements.
    pub reveal_class: &'static str,
    /// Sidebar that opts into the responsive content offset.
    pub sidebar_selector: &'static str,
    /// Id of the nav container.
    pub nav_id: &'static str,
    /// Nav links, queried inside the nav container.
    pub nav_link_selector: &'static str,
    /// Attribute holding a link's explicit target id.
    pub nav_target_attr: &'static str,
    /// Class marking the active link.
    pub active_class: &'static str,
    /// Id of the nav indicator.
    pub indicator_id: &'static str,
    /// Sections tracked for the active link.
    pub section_selector: &'static str,
    /// Id of the scroll-progress fill.
    pub scroll_progress_id: &'static str,
    /// Images that opt into fallback handling.
    pub fallback_selector: &'static str,
    /// Attribute holding the fallback URL.
    pub fallback_attr: &'static str,
    /// Timeline items.
    pub timeline_item_selector: &'static str,
    /// Class added to visible timeline items.
    pub timeline_item_class: &'static str,
    /// Id of the timeline progress fill.
    pub timeline_progress_id: &'static str,
    /// Id of the journey section driving the timeline.
    pub journey_id: &'static str,
    /// Skill category containers.
    pub skill_category_selector: &'static str,
    /// Skill bar fills, queried inside a category.
    pub skill_fill_selector: &'static str,
    /// Attribute storing a bar's captured target width.
    pub skill_width_attr: &'static str,
    /// Class added to a bar when its fill starts animating.
    pub skill_animate_class: &'static str,
    /// Id of the call-to-action button.
    pub cta_id: &'static str,
    /// Class added while the call-to-action button is pressed.
    pub cta_pressed_class: &'static str,
    /// Custom property receiving the pinned sidebar width.
    pub sidebar_width_property: &'static str,
}

impl Markup {
    /// Markup conventions of the portfolio page.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            reveal_selector: ".reveal",
            reveal_class: "show",
            sidebar_selector: "[data-sidebar]",
            nav_id: "sidebar-nav",
            nav_link_selector: ".nav-link",
            nav_target_attr: "data-target",
            active_class: "is-active",
            indicator_id: "sidebar-nav-indicator",
            section_selector: "[data-section]",
            scroll_progress_id: "sidebar-progress-fill",
            fallback_selector: "img[data-fallback]",
            fallback_attr: "data-fallback",
            timeline_item_selector: "[data-timeline-item]",
            timeline_item_class: "is-visible",
            timeline_progress_id: "timeline-progress",
            journey_id: "journey",
            skill_category_selector: ".skill-category",
            skill_fill_selector: ".skill-item__fill",
            skill_width_attr: "data-width",
            skill_animate_class: "animate",
            cta_id: "cta",
            cta_pressed_class: "scale-95",
            sidebar_width_property: "--sidebar-width",
        }
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_defaults() {
        let cfg = ViewSyncConfig::default();
        assert_eq!(cfg.anchor_ratio, 0.35);
        assert_eq!(cfg.reveal.threshold, 0.3);
        assert_eq!(cfg.skills.root_margin, "0px 0px -50px 0px");
        assert_eq!(cfg.skill_stagger, Duration::from_millis(100));
        assert_eq!(cfg.indicator.offset_divisor, 0.71);
    }

    #[test]
    fn media_query_uses_breakpoint() {
        let cfg = ViewSyncConfig::portfolio();
        assert_eq!(cfg.sidebar_media_query(), "(min-width: 1024px)");
    }
}
