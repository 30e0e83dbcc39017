//! Vertical intervals and the viewport intersection test.
//!
//! Everything is measured in pixels along the scroll axis. An interval is
//! treated as half-open, `[top, bottom)`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Interval {
    pub top: f64,
    pub bottom: f64,
}

impl Interval {
    /// Build an interval, swapping the bounds if they arrive reversed.
    pub fn new(top: f64, bottom: f64) -> Self {
        if bottom < top {
            Self { top: bottom, bottom: top }
        } else {
            Self { top, bottom }
        }
    }

    /// `[offset_top, offset_top + offset_height)` for a laid-out element.
    pub fn from_extent(offset_top: f64, offset_height: f64) -> Self {
        Self::new(offset_top, offset_top + offset_height.max(0.0))
    }

    /// The visible range of a scrolling context.
    pub fn viewport(scroll_offset: f64, viewport_height: f64) -> Self {
        Self::from_extent(scroll_offset, viewport_height)
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Which condition put an element in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Starts at or above the viewport top and reaches past it.
    BottomShowing,
    /// Strictly inside the viewport.
    Encased,
    /// Top edge strictly inside the viewport. Also covers an element that
    /// spans the whole viewport from below its top edge.
    TopShowing,
}

/// Classify `element` against `viewport`, returning the first matching case.
///
/// The "bottom showing" case accepts an element starting exactly at the
/// viewport top, so an element matching the viewport bounds is in view. An
/// element whose bottom equals the viewport top, or whose top equals the
/// viewport bottom, is not.
pub fn classify(viewport: Interval, element: Interval) -> Option<Visibility> {
    let (v_top, v_bot) = (viewport.top, viewport.bottom);
    let (e_top, e_bot) = (element.top, element.bottom);

    if e_top <= v_top && e_bot > v_top {
        return Some(Visibility::BottomShowing);
    }
    if e_top > v_top && e_bot < v_bot {
        return Some(Visibility::Encased);
    }
    if e_top > v_top && e_top < v_bot {
        return Some(Visibility::TopShowing);
    }
    None
}

/// True when any part of `element` counts as visible inside `viewport`.
pub fn intersects(viewport: Interval, element: Interval) -> bool {
    classify(viewport, element).is_some()
}
