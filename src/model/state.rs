//! Committed toolbar state

use serde::Serialize;

use crate::document::InlineNode;
use crate::position::OverlayPosition;

/// Everything the overlay renders from
///
/// Compared structurally before every commit: an equal state is never
/// committed, so the overlay is not re-rendered and its transition does not
/// restart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToolbarState {
    /// Whether the overlay is visible
    pub active: bool,
    /// Whether a pointer button is held anywhere in the document
    pub mouse_down: bool,
    /// Set while the link-editing view is shown
    pub link: Option<InlineNode>,
    /// `None` until a position has been measured
    pub position: Option<OverlayPosition>,
}

impl ToolbarState {
    /// Hidden, no link, no position. `mouse_down` is owned by the pointer
    /// listeners and is carried over.
    pub fn deactivated(&self) -> Self {
        Self {
            active: false,
            mouse_down: self.mouse_down,
            link: None,
            position: None,
        }
    }

    /// CSS `top`, empty while unpositioned
    pub fn top(&self) -> String {
        self.position.map(|p| p.top_px()).unwrap_or_default()
    }

    /// CSS `left`, empty while unpositioned
    pub fn left(&self) -> String {
        self.position.map(|p| p.left_px()).unwrap_or_default()
    }

    pub fn shows_link_view(&self) -> bool {
        self.link.is_some()
    }

    /// Panic in debug builds if the state is internally inconsistent
    pub fn assert_invariants(&self) {
        debug_assert!(
            !self.active || self.position.is_some(),
            "active toolbar without a position: {:?}",
            self
        );
    }
}
