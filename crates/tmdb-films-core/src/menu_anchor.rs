//! Settings popover anchoring
//!
//! The popover is open exactly while an anchor is held. Where it lands on
//! screen is decided by a [`Positioner`], so the toolkit layer only has to
//! measure the anchor element.

use serde::{Deserialize, Serialize};

/// Popover open state, tied to the element that opened it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuAnchor<A> {
    anchor: Option<A>,
}

impl<A> Default for MenuAnchor<A> {
    fn default() -> Self {
        Self { anchor: None }
    }
}

impl<A> MenuAnchor<A> {
    /// Starts closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor to `anchor`, replacing any previous anchor
    pub fn open(&mut self, anchor: A) {
        self.anchor = Some(anchor);
    }

    /// Idempotent
    pub fn close(&mut self) {
        self.anchor = None;
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<&A> {
        self.anchor.as_ref()
    }
}

/// Viewport-relative bounding box of an anchor element, in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Where a floating surface goes, as `top` / `right` offsets from the viewport
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub right: f64,
}

impl Placement {
    /// Inline style for a `position: fixed` surface
    pub fn to_style(&self) -> String {
        format!("top: {}px; right: {}px;", self.top, self.right)
    }
}

/// Positions a floating surface of known width relative to an on-screen anchor
pub trait Positioner {
    fn place(&self, anchor: &AnchorRect, surface_width: f64, viewport_width: f64) -> Placement;
}

/// Aligns the surface's top-right corner with the anchor's top-right corner,
/// pushed down by `offset_y`
///
/// Both horizontal edges stay inside the viewport when the surface fits in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopRightPositioner {
    pub offset_y: f64,
}

impl Default for TopRightPositioner {
    fn default() -> Self {
        Self { offset_y: 45.0 }
    }
}

impl Positioner for TopRightPositioner {
    fn place(&self, anchor: &AnchorRect, surface_width: f64, viewport_width: f64) -> Placement {
        let max_right = (viewport_width - surface_width).max(0.0);
        let right = (viewport_width - anchor.right()).clamp(0.0, max_right);
        let top = (anchor.top + self.offset_y).max(0.0);
        Placement { top, right }
    }
}
