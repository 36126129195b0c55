//! Platform measurements consumed by the toolbar
//!
//! Everything the toolbar needs from the windowing/DOM layer goes through
//! [`Platform`]: the native text selection, element bounding boxes, the
//! overlay's own size and the scroll offsets.

use std::collections::HashMap;

use serde::Deserialize;

use crate::document::NodeKey;

/// Bounding box in viewport coordinates (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect at exactly (0, 0) comes from a hidden or stale selection,
    /// not from a real on-screen measurement.
    pub fn is_degenerate(&self) -> bool {
        self.top == 0.0 && self.left == 0.0
    }
}

/// Measured size of the overlay element
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Snapshot of the platform text-selection object
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TextSelection {
    #[serde(default)]
    pub is_collapsed: bool,
    /// Bounding box of each selection range
    #[serde(default)]
    pub ranges: Vec<Rect>,
}

impl TextSelection {
    pub fn collapsed() -> Self {
        Self {
            is_collapsed: true,
            ranges: Vec::new(),
        }
    }

    pub fn spanning(rect: Rect) -> Self {
        Self {
            is_collapsed: false,
            ranges: vec![rect],
        }
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn range_rect(&self, index: usize) -> Option<Rect> {
        self.ranges.get(index).copied()
    }
}

pub trait Platform {
    /// Current native text selection, if the platform exposes one
    fn text_selection(&self) -> Option<TextSelection>;

    /// Rendered bounding box of a document node
    fn element_rect(&self, node: NodeKey) -> Option<Rect>;

    /// Size of the overlay element, or `None` while it is not mounted
    fn overlay_size(&self) -> Option<Size>;

    /// Horizontal and vertical scroll offsets
    fn scroll_offset(&self) -> (f64, f64);
}

/// Platform whose measurements are plain fields
///
/// Used by the simulator and by hosts that measure ahead of time.
#[derive(Debug, Clone, Default)]
pub struct StaticPlatform {
    pub selection: Option<TextSelection>,
    pub element_rects: HashMap<NodeKey, Rect>,
    pub overlay: Option<Size>,
    pub scroll: (f64, f64),
}

impl StaticPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overlay(mut self, width: f64, height: f64) -> Self {
        self.overlay = Some(Size::new(width, height));
        self
    }

    pub fn with_selection(mut self, selection: TextSelection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_element_rect(mut self, node: NodeKey, rect: Rect) -> Self {
        self.element_rects.insert(node, rect);
        self
    }

    pub fn with_scroll(mut self, x: f64, y: f64) -> Self {
        self.scroll = (x, y);
        self
    }
}

impl Platform for StaticPlatform {
    fn text_selection(&self) -> Option<TextSelection> {
        self.selection.clone()
    }

    fn element_rect(&self, node: NodeKey) -> Option<Rect> {
        self.element_rects.get(&node).copied()
    }

    fn overlay_size(&self) -> Option<Size> {
        self.overlay
    }

    fn scroll_offset(&self) -> (f64, f64) {
        self.scroll
    }
}
