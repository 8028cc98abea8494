// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image fallback policy.
//!
//! Images opt in with a fallback attribute. When one fails to load (or has
//! already failed by the time it is inspected) its source is replaced once
//! with the attribute's URL, or with [`FALLBACK_IMAGE_DATA`] when the
//! attribute is empty. A failure of the fallback itself is not handled.

/// Inline placeholder: a 320×200 rounded rectangle with a pink-to-amber
/// gradient and a white check stroke.
pub const FALLBACK_IMAGE_DATA: &str = concat!(
    "data:image/svg+xml;utf8,",
    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"320\" height=\"200\" ",
    "viewBox=\"0 0 320 200\" preserveAspectRatio=\"xMidYMid slice\">",
    "<defs><linearGradient id=\"g\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">",
    "<stop offset=\"0%\" stop-color=\"%23ef6cff\"/>",
    "<stop offset=\"100%\" stop-color=\"%23f7b733\"/>",
    "</linearGradient></defs>",
    "<rect width=\"320\" height=\"200\" rx=\"24\" fill=\"url(%23g)\"/>",
    "<path d=\"M96 116l32-32 32 32 32-32 32 32\" stroke=\"%23ffffff\" ",
    "stroke-width=\"12\" stroke-linecap=\"round\" stroke-linejoin=\"round\" fill=\"none\"/>",
    "</svg>",
);

/// Returns the source to substitute for a broken image.
#[must_use]
pub fn fallback_source(attr: Option<&str>) -> &str {
    match attr {
        Some(url) if !url.is_empty() => url,
        _ => FALLBACK_IMAGE_DATA,
    }
}

/// Returns `true` if an image has finished loading without any pixels.
#[must_use]
pub fn is_broken(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

/// One image's fallback lifecycle: `Armed → Applied`, terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackSlot {
    /// Waiting for a failure; holds the source to substitute.
    Armed(alloc::string::String),
    /// The fallback has been applied.
    Applied,
}

impl FallbackSlot {
    /// Arms a slot from the image's fallback attribute.
    #[must_use]
    pub fn arm(attr: Option<&str>) -> Self {
        Self::Armed(alloc::string::String::from(fallback_source(attr)))
    }

    /// Moves to `Applied`, returning the source to set the first time only.
    pub fn apply(&mut self) -> Option<alloc::string::String> {
        match core::mem::replace(self, Self::Applied) {
            Self::Armed(src) => Some(src),
            Self::Applied => None,
        }
    }

    /// Returns `true` once the fallback has been applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_prefers_attribute() {
        assert_eq!(fallback_source(Some("/img/alt.png")), "/img/alt.png");
    }

    #[test]
    fn source_defaults_to_placeholder() {
        assert_eq!(fallback_source(Some("")), FALLBACK_IMAGE_DATA);
        assert_eq!(fallback_source(None), FALLBACK_IMAGE_DATA);
    }

    #[test]
    fn placeholder_is_inline_svg() {
        assert!(FALLBACK_IMAGE_DATA.starts_with("data:image/svg+xml;utf8,<svg"));
        assert!(FALLBACK_IMAGE_DATA.ends_with("</svg>"));
        assert!(FALLBACK_IMAGE_DATA.contains("%23ef6cff"));
    }

    #[test]
    fn broken_needs_complete_and_empty() {
        assert!(is_broken(true, 0));
        assert!(!is_broken(false, 0));
        assert!(!is_broken(true, 320));
    }

    #[test]
    fn applies_once() {
        let mut slot = FallbackSlot::arm(Some("/fallback.png"));
        assert!(!slot.is_applied());
        assert_eq!(slot.apply().as_deref(), Some("/fallback.png"));
        assert!(slot.is_applied());
        assert_eq!(slot.apply(), None, "second failure is not handled");
    }
}
