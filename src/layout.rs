//! Panel geometry and hit-testing
//!
//! The host owns the real view hierarchy; this module only answers where the
//! side container, the front container, and the overlay sit for a given reveal
//! offset, and which of them is under a point.
//!
//! ```text
//!  ┌──────────┬──────────────────────────┐
//!  │  side    │  front (+ overlay)       │
//!  │ 0..width │  offset..offset+viewport │
//!  └──────────┴──────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::overlay::OverlayState;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Size of the component's own bounds, supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Frames of the two containers and the overlay for one reveal offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelFrames {
    /// Pinned to the leading edge, `reveal_width` wide, behind the front panel
    pub side: Rect,
    /// Full component width, shifted right by the reveal offset
    pub front: Rect,
    /// Covers the front container exactly
    pub overlay: Rect,
}

impl PanelFrames {
    pub fn compute(viewport: Viewport, offset: f32, reveal_width: f32) -> Self {
        let side = Rect::new(0.0, 0.0, reveal_width, viewport.height);
        let front = Rect::new(offset, 0.0, viewport.width, viewport.height);
        Self {
            side,
            front,
            overlay: front,
        }
    }
}

/// What a pointer landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The overlay above the front panel (only while it intercepts taps)
    Overlay,
    /// Front panel content
    Front,
    /// Side panel content
    Side,
    /// Outside the component, or uncovered side-container area
    None,
}

/// Find the topmost target at a point
///
/// Priority, top to bottom: interactive overlay, front panel, side panel.
pub fn hit_test(frames: &PanelFrames, overlay: &OverlayState, x: f32, y: f32) -> HitTarget {
    if overlay.interactive && frames.overlay.contains(x, y) {
        return HitTarget::Overlay;
    }
    if frames.front.contains(x, y) {
        return HitTarget::Front;
    }
    if frames.side.contains(x, y) {
        return HitTarget::Side;
    }
    HitTarget::None
}
