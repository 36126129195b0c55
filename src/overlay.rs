//! Overlay rendering
//!
//! Turns the committed [`ToolbarState`] into an absolutely positioned overlay
//! node and hands it to a [`Portal`], a render target that lives outside the
//! editor's own tree so ancestor clipping and stacking contexts don't apply.

use crate::document::InlineNode;
use crate::editor::FormatAction;
use crate::model::ToolbarState;
use crate::theme::{Color, ToolbarTheme};

/// Offset used while the overlay has never been positioned
pub const OFFSCREEN_PX: i64 = -10_000;

/// Stacking order of the overlay layer
pub const Z_INDEX: i32 = 300;

/// Fixed overlay height in pixels
pub const HEIGHT_PX: u32 = 40;

/// Show/hide transition of opacity and transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: &'static str,
}

pub const TRANSITION: Transition = Transition {
    duration_ms: 150,
    delay_ms: 250,
    easing: "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
    /// Click-through while hidden
    None,
    All,
}

impl PointerEvents {
    fn as_css(self) -> &'static str {
        match self {
            PointerEvents::None => "none",
            PointerEvents::All => "all",
        }
    }
}

/// Computed style of the overlay container
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub top: String,
    pub left: String,
    pub opacity: f32,
    pub transform: &'static str,
    pub pointer_events: PointerEvents,
    pub background: Color,
    pub transition: Transition,
}

impl OverlayStyle {
    pub fn for_state(state: &ToolbarState, theme: &ToolbarTheme) -> Self {
        let offscreen = format!("{}px", OFFSCREEN_PX);
        let (top, left) = match state.position {
            Some(_) => (state.top(), state.left()),
            None => (offscreen.clone(), offscreen),
        };

        let (opacity, transform, pointer_events) = if state.active {
            (1.0, "translateY(-6px) scale(1)", PointerEvents::All)
        } else {
            (0.0, "scale(0.95)", PointerEvents::None)
        };

        Self {
            top,
            left,
            opacity,
            transform,
            pointer_events,
            background: theme.background,
            transition: TRANSITION,
        }
    }

    /// Inline CSS declarations for the container
    pub fn to_css(&self) -> String {
        let transition = format!(
            "opacity {d}ms {e}, transform {d}ms {e}",
            d = self.transition.duration_ms,
            e = self.transition.easing
        );
        [
            "position: absolute".to_string(),
            format!("z-index: {}", Z_INDEX),
            format!("top: {}", self.top),
            format!("left: {}", self.left),
            "padding: 8px 16px".to_string(),
            format!("height: {}px", HEIGHT_PX),
            "box-sizing: border-box".to_string(),
            "line-height: 0".to_string(),
            "border-radius: 4px".to_string(),
            format!("background-color: {}", self.background.to_css()),
            format!("opacity: {}", self.opacity),
            format!("transform: {}", self.transform),
            format!("pointer-events: {}", self.pointer_events.as_css()),
            format!("transition: {}", transition),
            format!("transition-delay: {}ms", self.transition.delay_ms),
        ]
        .join("; ")
    }
}

/// Formatting controls plus the create-link entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingView {
    pub actions: Vec<FormatAction>,
}

/// Editor for an existing hyperlink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub link: InlineNode,
}

impl LinkView {
    pub fn href(&self) -> &str {
        self.link.href.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarView {
    Formatting(FormattingView),
    Link(LinkView),
}

/// A rendered overlay: the container style and its content
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayNode {
    pub style: OverlayStyle,
    pub view: ToolbarView,
    /// Print output never shows the toolbar
    pub hidden_in_print: bool,
}

impl OverlayNode {
    pub fn is_link_view(&self) -> bool {
        matches!(self.view, ToolbarView::Link(_))
    }
}

/// Render the overlay for a committed state
pub fn render(state: &ToolbarState, theme: &ToolbarTheme) -> OverlayNode {
    let view = match &state.link {
        Some(link) => ToolbarView::Link(LinkView { link: link.clone() }),
        None => ToolbarView::Formatting(FormattingView {
            actions: FormatAction::ALL.to_vec(),
        }),
    };

    OverlayNode {
        style: OverlayStyle::for_state(state, theme),
        view,
        hidden_in_print: true,
    }
}

/// Render target detached from the editor's component tree
pub trait Portal {
    /// Replace whatever the portal currently shows
    fn mount(&mut self, node: OverlayNode);

    /// Remove the overlay from the layer
    fn unmount(&mut self);
}

/// In-memory portal layer that keeps the last mounted node
#[derive(Debug, Default)]
pub struct DetachedLayer {
    current: Option<OverlayNode>,
    renders: usize,
}

impl DetachedLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&OverlayNode> {
        self.current.as_ref()
    }

    /// How many times a node was mounted
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Portal for DetachedLayer {
    fn mount(&mut self, node: OverlayNode) {
        self.renders += 1;
        self.current = Some(node);
    }

    fn unmount(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::NodeKey;
    use crate::position::OverlayPosition;

    fn positioned(active: bool) -> ToolbarState {
        ToolbarState {
            active,
            mouse_down: false,
            link: None,
            position: Some(OverlayPosition { top: 120, left: 48 }),
        }
    }

    #[test]
    fn test_unpositioned_overlay_is_offscreen() {
        let node = render(&ToolbarState::default(), &ToolbarTheme::default());
        assert_eq!(node.style.top, "-10000px");
        assert_eq!(node.style.left, "-10000px");
        assert_eq!(node.style.pointer_events, PointerEvents::None);
    }

    #[test]
    fn test_active_overlay_style() {
        let node = render(&positioned(true), &ToolbarTheme::default());
        assert_eq!(node.style.top, "120px");
        assert_eq!(node.style.left, "48px");
        assert_eq!(node.style.opacity, 1.0);
        assert_eq!(node.style.pointer_events, PointerEvents::All);
        assert!(node.style.to_css().contains("pointer-events: all"));
    }

    #[test]
    fn test_inactive_overlay_is_click_through() {
        let node = render(&positioned(false), &ToolbarTheme::default());
        assert_eq!(node.style.opacity, 0.0);
        assert_eq!(node.style.transform, "scale(0.95)");
        let css = node.style.to_css();
        assert!(css.contains("pointer-events: none"));
        assert!(css.contains("transition-delay: 250ms"));
    }

    #[test]
    fn test_link_selects_link_view() {
        let mut state = positioned(true);
        state.link = Some(InlineNode {
            key: NodeKey(4),
            node_type: "link".to_string(),
            href: Some("https://example.com".to_string()),
        });
        let node = render(&state, &ToolbarTheme::default());
        match node.view {
            ToolbarView::Link(view) => assert_eq!(view.href(), "https://example.com"),
            other => panic!("expected link view, got {:?}", other),
        }
    }

    #[test]
    fn test_formatting_view_offers_create_link() {
        let node = render(&positioned(true), &ToolbarTheme::default());
        match node.view {
            ToolbarView::Formatting(view) => {
                assert!(view.actions.contains(&FormatAction::CreateLink))
            }
            other => panic!("expected formatting view, got {:?}", other),
        }
    }
}
