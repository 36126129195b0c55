//! Host editor commands reachable from the toolbar views

use crate::document::NodeKey;

/// Inline/block formatting offered by the formatting view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatAction {
    Bold,
    Italic,
    Strikethrough,
    InlineCode,
    Heading,
    Quote,
    BulletedList,
    OrderedList,
    /// Opens the link editor instead of formatting anything
    CreateLink,
}

impl FormatAction {
    /// Buttons of the formatting view, in display order
    pub const ALL: [FormatAction; 9] = [
        FormatAction::Bold,
        FormatAction::Italic,
        FormatAction::Strikethrough,
        FormatAction::InlineCode,
        FormatAction::Heading,
        FormatAction::Quote,
        FormatAction::BulletedList,
        FormatAction::OrderedList,
        FormatAction::CreateLink,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormatAction::Bold => "Bold",
            FormatAction::Italic => "Italic",
            FormatAction::Strikethrough => "Strikethrough",
            FormatAction::InlineCode => "Code",
            FormatAction::Heading => "Heading",
            FormatAction::Quote => "Quote",
            FormatAction::BulletedList => "Bulleted list",
            FormatAction::OrderedList => "Ordered list",
            FormatAction::CreateLink => "Link",
        }
    }
}

/// The editor the toolbar acts on
pub trait EditorHandle {
    /// Toggle a formatting action over the current selection
    fn apply_format(&self, action: FormatAction);

    /// Set a link's target, or unwrap the link when `href` is `None`
    fn set_link_href(&self, link: NodeKey, href: Option<&str>);
}

/// Editor that only logs what it was asked to do
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEditor;

impl EditorHandle for LoggingEditor {
    fn apply_format(&self, action: FormatAction) {
        tracing::info!(action = action.label(), "apply format");
    }

    fn set_link_href(&self, link: NodeKey, href: Option<&str>) {
        tracing::info!(%link, ?href, "set link href");
    }
}

/// A UI input event whose default handling can be suppressed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputEvent {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl InputEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
