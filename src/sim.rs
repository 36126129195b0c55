//! Scenario replay
//!
//! A scenario describes a document, the platform measurements and a list of
//! steps (selection changes, pointer presses, elapsed time, link actions).
//! Replaying it drives a real [`ToolbarController`] with a manual timer and
//! records every committed state.

use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{bail, Context as _};
use serde::Deserialize;

use crate::config::ToolbarConfig;
use crate::controller::{Lifecycle, ToolbarController, ToolbarProps};
use crate::document::MemoryDocument;
use crate::editor::{EditorHandle, InputEvent, LoggingEditor};
use crate::model::ToolbarState;
use crate::overlay::{self, DetachedLayer};
use crate::platform::{Rect, Size, StaticPlatform, TextSelection};
use crate::pointer::{PointerEvent, PointerHub};
use crate::theme::ToolbarTheme;
use crate::timer::ManualTimer;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub document: DocumentSpec,
    #[serde(default)]
    pub platform: PlatformSpec,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSpec {
    pub blocks: Vec<BlockSpec>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    /// Initial `[anchor, focus]`
    #[serde(default)]
    pub selection: (usize, usize),
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockSpec {
    #[serde(rename = "type")]
    pub node_type: String,
    pub len: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkSpec {
    pub start: usize,
    pub end: usize,
    pub href: String,
    /// Rendered bounding box of the link element
    #[serde(default)]
    pub rect: Option<Rect>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformSpec {
    #[serde(default)]
    pub overlay: Option<Size>,
    #[serde(default)]
    pub scroll: (f64, f64),
    /// Native text selection
    #[serde(default)]
    pub selection: Option<TextSelection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Down,
    Up,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Move the document selection; optionally replace the native selection
    Select {
        anchor: usize,
        focus: usize,
        #[serde(default)]
        native: Option<TextSelection>,
    },
    Pointer {
        button: Button,
    },
    /// Let time pass for the debounce timer
    Advance {
        ms: u64,
    },
    ShowLink,
    HideLink,
    SubmitLink {
        #[serde(default)]
        href: Option<String>,
    },
    Unmount,
}

impl Step {
    pub fn label(&self) -> String {
        match self {
            Step::Select { anchor, focus, .. } => format!("select {}..{}", anchor, focus),
            Step::Pointer { button: Button::Down } => "pointer down".to_string(),
            Step::Pointer { button: Button::Up } => "pointer up".to_string(),
            Step::Advance { ms } => format!("advance {}ms", ms),
            Step::ShowLink => "show link".to_string(),
            Step::HideLink => "hide link".to_string(),
            Step::SubmitLink { href } => format!("submit link {:?}", href),
            Step::Unmount => "unmount".to_string(),
        }
    }
}

impl Scenario {
    /// Load a scenario from a `.json` or YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let scenario = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse scenario {}", path.display()))?
        } else {
            Self::from_yaml(&content)
                .with_context(|| format!("Failed to parse scenario {}", path.display()))?
        };
        Ok(scenario)
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// A state commit observed while replaying
#[derive(Debug, Clone)]
pub struct Frame {
    /// Index of the step that produced the commit
    pub step: usize,
    pub label: String,
    pub state: ToolbarState,
    /// Inline CSS of the rendered overlay
    pub css: String,
}

impl Frame {
    pub fn view_name(&self) -> &'static str {
        if self.state.shows_link_view() {
            "link"
        } else {
            "formatting"
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "step": self.step,
            "label": self.label,
            "active": self.state.active,
            "mouse_down": self.state.mouse_down,
            "link": self.state.link.as_ref().map(|l| l.key.0),
            "href": self.state.link.as_ref().and_then(|l| l.href.clone()),
            "top": self.state.top(),
            "left": self.state.left(),
            "view": self.view_name(),
        })
    }

    pub fn to_text(&self) -> String {
        let link = self
            .state
            .link
            .as_ref()
            .map_or("none".to_string(), |l| l.key.to_string());
        format!(
            "[{:>3}] {:<20} active={:<5} link={:<5} top={:<8} left={:<8} view={}",
            self.step,
            self.label,
            self.state.active,
            link,
            display(&self.state.top()),
            display(&self.state.left()),
            self.view_name()
        )
    }
}

fn display(px: &str) -> &str {
    if px.is_empty() {
        "-"
    } else {
        px
    }
}

fn build(scenario: &Scenario) -> anyhow::Result<(MemoryDocument, StaticPlatform)> {
    if scenario.document.blocks.is_empty() {
        bail!("scenario document has no blocks");
    }

    let mut doc = MemoryDocument::new();
    for block in &scenario.document.blocks {
        doc.push_block(&block.node_type, block.len);
    }

    let (scroll_x, scroll_y) = scenario.platform.scroll;
    let mut platform = StaticPlatform::new().with_scroll(scroll_x, scroll_y);
    platform.overlay = scenario.platform.overlay;
    platform.selection = scenario.platform.selection.clone();

    for link in &scenario.document.links {
        if link.end > doc.len() {
            bail!(
                "link {}..{} extends past the document (len {})",
                link.start,
                link.end,
                doc.len()
            );
        }
        let key = doc.push_link(link.start, link.end, &link.href);
        if let Some(rect) = link.rect {
            platform = platform.with_element_rect(key, rect);
        }
    }

    let (anchor, focus) = scenario.document.selection;
    doc.select(anchor, focus);
    Ok((doc, platform))
}

/// Replay a scenario and collect every committed state
pub fn run(
    scenario: &Scenario,
    config: ToolbarConfig,
    theme: ToolbarTheme,
) -> anyhow::Result<Vec<Frame>> {
    let (mut doc, platform) = build(scenario)?;
    let pointer = PointerHub::new();
    let editor: Rc<dyn EditorHandle> = Rc::new(LoggingEditor);

    let mut controller = ToolbarController::new(
        config,
        theme.clone(),
        platform,
        ManualTimer::new(),
        DetachedLayer::new(),
        pointer.clone(),
    );
    controller.on_mount(ToolbarProps::new(Rc::new(doc.clone()), Rc::clone(&editor)));

    let mut frames = Vec::new();
    let mut commits = controller.model().commits;

    for (index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(index, step = %step.label(), "replaying");

        match step {
            Step::Select {
                anchor,
                focus,
                native,
            } => {
                doc.select(*anchor, *focus);
                if let Some(native) = native {
                    controller.platform_mut().selection = Some(native.clone());
                }
                controller.on_update(ToolbarProps::new(Rc::new(doc.clone()), Rc::clone(&editor)));
            }
            Step::Pointer { button } => pointer.emit(match button {
                Button::Down => PointerEvent::Down,
                Button::Up => PointerEvent::Up,
            }),
            Step::Advance { ms } => {
                // Apply queued input first so the timer sees the latest arm
                controller.process_pending();
                controller.timer_mut().advance(Duration::from_millis(*ms));
            }
            Step::ShowLink => controller.show_link_toolbar(&mut InputEvent::new()),
            Step::HideLink => controller.hide_link_toolbar(),
            Step::SubmitLink { href } => controller.submit_link(href.as_deref()),
            Step::Unmount => controller.on_unmount(),
        }
        controller.process_pending();

        if controller.model().commits != commits {
            commits = controller.model().commits;
            let state = controller.state().clone();
            let css = overlay::render(&state, &theme).style.to_css();
            frames.push(Frame {
                step: index,
                label: step.label(),
                state,
                css,
            });
        }
    }

    Ok(frames)
}
