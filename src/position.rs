//! Overlay placement above a measured rect

use serde::Serialize;

use crate::platform::{Rect, Size};

/// Minimum distance from the viewport's left edge, in pixels
pub const DEFAULT_PADDING: f64 = 16.0;

/// Absolute overlay position in whole pixels
///
/// `top` and `left` always come from the same measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlayPosition {
    pub top: i64,
    pub left: i64,
}

impl OverlayPosition {
    pub fn top_px(&self) -> String {
        format!("{}px", self.top)
    }

    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }
}

/// Center the overlay horizontally over `rect` and sit it directly above
///
/// The horizontal position is clamped to `padding` so the overlay never
/// crosses the left edge of the viewport.
pub fn place_above(rect: Rect, scroll: (f64, f64), overlay: Size, padding: f64) -> OverlayPosition {
    let (scroll_x, scroll_y) = scroll;
    let left = rect.left + scroll_x - overlay.width / 2.0 + rect.width / 2.0;
    let top = rect.top + scroll_y - overlay.height;

    OverlayPosition {
        top: round_half_up(top),
        left: round_half_up(left.max(padding)),
    }
}

/// Halves round toward positive infinity, including negative values
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
