//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use floatbar::config::ToolbarConfig;
use floatbar::controller::{Lifecycle, ToolbarController, ToolbarProps};
use floatbar::document::{MemoryDocument, NodeKey};
use floatbar::editor::{EditorHandle, FormatAction};
use floatbar::overlay::DetachedLayer;
use floatbar::platform::{Rect, StaticPlatform, TextSelection};
use floatbar::pointer::PointerHub;
use floatbar::theme::ToolbarTheme;
use floatbar::timer::ManualTimer;

pub type TestController = ToolbarController<StaticPlatform, ManualTimer>;

/// Where the highlighted range is drawn on screen
pub const SELECTION_RECT: Rect = Rect {
    left: 300.0,
    top: 200.0,
    width: 100.0,
    height: 20.0,
};

/// heading1 `0..10`, paragraph `10..100`, code_block `100..150`
pub fn test_document() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.push_block("heading1", 10);
    doc.push_block("paragraph", 90);
    doc.push_block("code_block", 50);
    doc
}

/// 200x40 overlay with a native selection over [`SELECTION_RECT`]
pub fn selecting_platform() -> StaticPlatform {
    StaticPlatform::new()
        .with_overlay(200.0, 40.0)
        .with_selection(TextSelection::spanning(SELECTION_RECT))
}

/// Editor that records every call it receives
#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub formats: RefCell<Vec<FormatAction>>,
    pub hrefs: RefCell<Vec<(NodeKey, Option<String>)>>,
}

impl EditorHandle for RecordingEditor {
    fn apply_format(&self, action: FormatAction) {
        self.formats.borrow_mut().push(action);
    }

    fn set_link_href(&self, link: NodeKey, href: Option<&str>) {
        self.hrefs
            .borrow_mut()
            .push((link, href.map(str::to_string)));
    }
}

/// A controller wired to a manual timer, a pointer hub and a recording editor
pub struct Harness {
    pub controller: TestController,
    pub pointer: PointerHub,
    pub editor: Rc<RecordingEditor>,
}

impl Harness {
    pub fn new(platform: StaticPlatform) -> Self {
        Self::with_config(ToolbarConfig::default(), platform)
    }

    pub fn with_config(config: ToolbarConfig, platform: StaticPlatform) -> Self {
        let pointer = PointerHub::new();
        let controller = ToolbarController::new(
            config,
            ToolbarTheme::default(),
            platform,
            ManualTimer::new(),
            DetachedLayer::new(),
            pointer.clone(),
        );
        Self {
            controller,
            pointer,
            editor: Rc::new(RecordingEditor::default()),
        }
    }

    pub fn props(&self, doc: &MemoryDocument) -> ToolbarProps {
        ToolbarProps::new(Rc::new(doc.clone()), Rc::clone(&self.editor) as Rc<dyn EditorHandle>)
    }

    pub fn mount(&mut self, doc: &MemoryDocument) {
        let props = self.props(doc);
        self.controller.on_mount(props);
    }

    pub fn update(&mut self, doc: &MemoryDocument) {
        let props = self.props(doc);
        self.controller.on_update(props);
    }

    /// Apply queued messages, then let the debounce delay elapse
    pub fn settle(&mut self) {
        self.controller.process_pending();
        self.advance(100);
    }

    pub fn advance(&mut self, ms: u64) {
        self.controller
            .timer_mut()
            .advance(Duration::from_millis(ms));
        self.controller.process_pending();
    }

    pub fn commits(&self) -> u64 {
        self.controller.model().commits
    }
}
