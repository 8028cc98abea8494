// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidebar navigation state.
//!
//! [`NavTracker`] owns the ordered list of nav links (by their resolved
//! targets) and which one is active. It moves between two states:
//!
//! - **No active link** — only before initialization, or when the page has
//!   no links at all.
//! - **Link `L` active** — exactly one link carries the active state.
//!
//! Transitions come from three sources, recorded as [`ActivationCause`]:
//! the initial URL fragment, a click on a link whose target section exists,
//! and scrolling across a section boundary.
//!
//! The tracker never touches the DOM. Callers apply each returned
//! [`ActiveChange`] by toggling classes and `aria-current`, then re-place
//! the indicator one frame later.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Resolves the section id a nav link points at.
///
/// The policy is ordered: a non-empty explicit target attribute wins; then a
/// non-empty `href`, with one leading `#` stripped; otherwise `None`.
#[must_use]
pub fn link_target<'a>(data_target: Option<&'a str>, href: Option<&'a str>) -> Option<&'a str> {
    if let Some(target) = data_target.filter(|t| !t.is_empty()) {
        return Some(target);
    }
    let href = href.filter(|h| !h.is_empty())?;
    Some(href.strip_prefix('#').unwrap_or(href))
}

/// One nav link as seen by the tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Raw `href` attribute, if any.
    pub href: Option<String>,
    /// Resolved target section id, per [`link_target`].
    pub target: Option<String>,
}

impl NavLink {
    /// Builds a link from its explicit target attribute and `href`.
    #[must_use]
    pub fn new(data_target: Option<&str>, href: Option<&str>) -> Self {
        Self {
            href: href.map(String::from),
            target: link_target(data_target, href).map(String::from),
        }
    }
}

/// Why the active link changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivationCause {
    /// Resolved from the URL fragment (or defaulted) at load.
    Initial,
    /// A nav link was clicked.
    Click,
    /// Scrolling moved the anchor into another section.
    Scroll,
}

/// A transition of the active link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveChange {
    /// Previously active link.
    pub from: Option<usize>,
    /// Newly active link.
    pub to: usize,
    /// What triggered the change.
    pub cause: ActivationCause,
}

/// Result of a click on a nav link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The link has no target or the target section does not exist. The
    /// browser's default navigation proceeds.
    Ignored,
    /// The link became active. The caller prevents default navigation,
    /// scrolls `target_id` into view, and replaces the URL fragment with
    /// `fragment` without reloading.
    Navigate {
        /// The section id to scroll to.
        target_id: String,
        /// `#<target_id>`.
        fragment: String,
        /// The resulting transition.
        change: ActiveChange,
    },
}

/// Tracks which nav link is active.
#[derive(Clone, Debug, Default)]
pub struct NavTracker {
    links: Vec<NavLink>,
    active: Option<usize>,
}

impl NavTracker {
    /// Creates a tracker over `links` in document order, with no active link.
    #[must_use]
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            links,
            active: None,
        }
    }

    /// Returns the links in document order.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Returns the index of the active link.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Returns `true` if there are no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the link that should be active at load.
    ///
    /// `hash` is the raw URL fragment including its `#`, or empty. A link
    /// matches when its raw `href` equals the fragment or its resolved target
    /// equals the fragment without `#`. Without a match the first link is
    /// used.
    #[must_use]
    pub fn initial_link(&self, hash: &str) -> Option<usize> {
        if self.links.is_empty() {
            return None;
        }
        if !hash.is_empty() {
            let id = hash.strip_prefix('#').unwrap_or(hash);
            let matched = self.links.iter().position(|link| {
                link.href.as_deref() == Some(hash) || link.target.as_deref() == Some(id)
            });
            if matched.is_some() {
                return matched;
            }
        }
        Some(0)
    }

    /// Returns the first link targeting section `id`.
    #[must_use]
    pub fn find_by_section(&self, id: &str) -> Option<usize> {
        self.links
            .iter()
            .position(|link| link.target.as_deref() == Some(id))
    }

    /// Makes `index` the only active link.
    ///
    /// Returns the transition even when `index` is already active, since the
    /// indicator is re-placed on every activation. Out-of-range indices are
    /// ignored.
    pub fn set_active(&mut self, index: usize, cause: ActivationCause) -> Option<ActiveChange> {
        if index >= self.links.len() {
            return None;
        }
        let from = self.active.replace(index);
        Some(ActiveChange {
            from,
            to: index,
            cause,
        })
    }

    /// Activates the link for section `id` after a scroll.
    ///
    /// Only switches when such a link exists and differs from the current
    /// one.
    pub fn sync_to_section(&mut self, id: &str) -> Option<ActiveChange> {
        let candidate = self.find_by_section(id)?;
        if self.active == Some(candidate) {
            return None;
        }
        self.set_active(candidate, ActivationCause::Scroll)
    }

    /// Handles a click on link `index`.
    ///
    /// `section_exists` reports whether the document has an element with the
    /// given id.
    pub fn click(
        &mut self,
        index: usize,
        section_exists: impl FnOnce(&str) -> bool,
    ) -> ClickOutcome {
        let Some(target_id) = self
            .links
            .get(index)
            .and_then(|link| link.target.clone())
        else {
            return ClickOutcome::Ignored;
        };
        if !section_exists(&target_id) {
            return ClickOutcome::Ignored;
        }
        let Some(change) = self.set_active(index, ActivationCause::Click) else {
            return ClickOutcome::Ignored;
        };
        let fragment = format!("#{target_id}");
        ClickOutcome::Navigate {
            target_id,
            fragment,
            change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn tracker() -> NavTracker {
        NavTracker::new(vec![
            NavLink::new(None, Some("#about")),
            NavLink::new(Some("work"), Some("/work")),
            NavLink::new(None, Some("#contact")),
        ])
    }

    #[test]
    fn target_prefers_explicit_attribute() {
        assert_eq!(link_target(Some("work"), Some("#other")), Some("work"));
    }

    #[test]
    fn target_strips_fragment() {
        assert_eq!(link_target(None, Some("#about")), Some("about"));
        assert_eq!(link_target(Some(""), Some("#about")), Some("about"));
    }

    #[test]
    fn target_keeps_plain_href() {
        assert_eq!(link_target(None, Some("about")), Some("about"));
    }

    #[test]
    fn target_missing() {
        assert_eq!(link_target(None, None), None);
        assert_eq!(link_target(Some(""), Some("")), None);
    }

    #[test]
    fn initial_link_from_hash() {
        let t = tracker();
        assert_eq!(t.initial_link("#contact"), Some(2));
        // Matches the resolved target even when the href differs.
        assert_eq!(t.initial_link("#work"), Some(1));
    }

    #[test]
    fn initial_link_defaults_to_first() {
        let t = tracker();
        assert_eq!(t.initial_link(""), Some(0));
        assert_eq!(t.initial_link("#missing"), Some(0));
        assert_eq!(NavTracker::default().initial_link("#about"), None);
    }

    #[test]
    fn exactly_one_active_after_any_sequence() {
        let mut t = tracker();
        assert_eq!(t.active(), None);

        let first = t.initial_link("").expect("links exist");
        t.set_active(first, ActivationCause::Initial);
        assert_eq!(t.active(), Some(0));

        t.sync_to_section("contact");
        assert_eq!(t.active(), Some(2));

        let outcome = t.click(1, |_| true);
        assert!(matches!(outcome, ClickOutcome::Navigate { .. }));
        assert_eq!(t.active(), Some(1));

        t.sync_to_section("nowhere");
        assert_eq!(t.active(), Some(1), "unknown sections keep the current link");
    }

    #[test]
    fn sync_ignores_current_section() {
        let mut t = tracker();
        t.set_active(0, ActivationCause::Initial);
        assert_eq!(t.sync_to_section("about"), None);
        let change = t.sync_to_section("work").expect("switches");
        assert_eq!(change.from, Some(0));
        assert_eq!(change.to, 1);
        assert_eq!(change.cause, ActivationCause::Scroll);
    }

    #[test]
    fn click_navigates_to_existing_target() {
        let mut t = tracker();
        t.set_active(0, ActivationCause::Initial);
        match t.click(2, |id| id == "contact") {
            ClickOutcome::Navigate {
                target_id,
                fragment,
                change,
            } => {
                assert_eq!(target_id, "contact");
                assert_eq!(fragment, "#contact");
                assert_eq!(change.from, Some(0));
                assert_eq!(change.cause, ActivationCause::Click);
            }
            ClickOutcome::Ignored => panic!("target exists"),
        }
    }

    #[test]
    fn click_ignored_without_section() {
        let mut t = tracker();
        t.set_active(0, ActivationCause::Initial);
        assert_eq!(t.click(2, |_| false), ClickOutcome::Ignored);
        assert_eq!(t.active(), Some(0));
    }

    #[test]
    fn click_ignored_without_target() {
        let mut t = NavTracker::new(vec![NavLink::new(None, None)]);
        assert_eq!(t.click(0, |_| true), ClickOutcome::Ignored);
        assert_eq!(t.click(5, |_| true), ClickOutcome::Ignored);
        assert_eq!(t.active(), None);
    }

    #[test]
    fn reactivating_same_link_still_reports_change() {
        let mut t = tracker();
        t.set_active(1, ActivationCause::Initial);
        let change = t.set_active(1, ActivationCause::Click).expect("in range");
        assert_eq!(change.from, Some(1));
        assert_eq!(change.to, 1);
    }
}
