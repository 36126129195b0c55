//! Message types for the Elm-style architecture
//!
//! All toolbar state changes flow through these message types.

use crate::pointer::PointerEvent;

/// Host component lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleMsg {
    /// The toolbar was mounted into the host editor
    Mounted,
    /// The host editor's document or selection changed
    Updated,
    /// The toolbar is being torn down
    Unmounted,
}

/// Pointer button state from the process-wide listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    Down,
    Up,
}

impl From<PointerEvent> for PointerMsg {
    fn from(event: PointerEvent) -> Self {
        match event {
            PointerEvent::Down => PointerMsg::Down,
            PointerEvent::Up => PointerMsg::Up,
        }
    }
}

/// Toolbar-specific messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarMsg {
    /// A debounce timer elapsed for this generation
    RecomputeReady { generation: u64 },
    /// Show the link editor for the link under the selection (no debounce)
    ShowLinkToolbar,
    /// Leave the link editor
    HideLinkToolbar,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Lifecycle(LifecycleMsg),
    Pointer(PointerMsg),
    Toolbar(ToolbarMsg),
}
