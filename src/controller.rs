//! Toolbar controller
//!
//! Owns the model, the message channel, the pointer subscription, the
//! debounce timer and the portal. A UI framework adapter drives it through
//! the [`Lifecycle`] hooks and forwards toolbar interactions to the
//! imperative entry points.

use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crate::commands::Cmd;
use crate::config::ToolbarConfig;
use crate::document::DocumentSelection;
use crate::editor::{EditorHandle, FormatAction, InputEvent};
use crate::messages::{LifecycleMsg, Msg, ToolbarMsg};
use crate::model::{ToolbarModel, ToolbarState};
use crate::overlay::{self, DetachedLayer, Portal};
use crate::platform::Platform;
use crate::pointer::{PointerHub, Subscription};
use crate::theme::ToolbarTheme;
use crate::timer::Timer;
use crate::update::{update, Context};

/// Hooks a host component calls over the toolbar's mount lifetime
pub trait Lifecycle {
    type Props;

    fn on_mount(&mut self, props: Self::Props);
    fn on_update(&mut self, props: Self::Props);
    fn on_unmount(&mut self);
}

/// Inputs from the host editor
#[derive(Clone)]
pub struct ToolbarProps {
    /// Current document/selection snapshot
    pub value: Rc<dyn DocumentSelection>,
    pub editor: Rc<dyn EditorHandle>,
}

impl ToolbarProps {
    pub fn new(value: Rc<dyn DocumentSelection>, editor: Rc<dyn EditorHandle>) -> Self {
        Self { value, editor }
    }
}

pub struct ToolbarController<P: Platform, T: Timer, L: Portal = DetachedLayer> {
    model: ToolbarModel,
    theme: ToolbarTheme,
    platform: P,
    timer: T,
    portal: L,
    pointer: PointerHub,
    subscription: Option<Subscription>,
    props: Option<ToolbarProps>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl<P: Platform, T: Timer, L: Portal> ToolbarController<P, T, L> {
    pub fn new(
        config: ToolbarConfig,
        theme: ToolbarTheme,
        platform: P,
        timer: T,
        portal: L,
        pointer: PointerHub,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model: ToolbarModel::new(config),
            theme,
            platform,
            timer,
            portal,
            pointer,
            subscription: None,
            props: None,
            msg_tx,
            msg_rx,
        }
    }

    pub fn state(&self) -> &ToolbarState {
        &self.model.state
    }

    pub fn model(&self) -> &ToolbarModel {
        &self.model
    }

    pub fn is_mounted(&self) -> bool {
        self.model.mounted
    }

    pub fn portal(&self) -> &L {
        &self.portal
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Sender for messages produced outside the controller (timers, listeners)
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Run a message through the update loop and perform its command
    pub fn dispatch(&mut self, msg: Msg) {
        let value = self.props.as_ref().map(|props| Rc::clone(&props.value));
        let ctx = Context::new(value.as_deref(), &self.platform);
        if let Some(cmd) = update(&mut self.model, msg, &ctx) {
            self.process_cmd(cmd);
        }
    }

    /// Drain messages queued by timers and pointer listeners
    ///
    /// Returns how many messages were handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Block until the next queued message arrives or `timeout` passes
    pub fn wait_for_message(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(_) => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::RedrawOverlay => self.render(),
            Cmd::RemoveOverlay => self.portal.unmount(),
            Cmd::ScheduleRecompute {
                generation,
                delay_ms,
            } => {
                self.timer
                    .arm(generation, Duration::from_millis(delay_ms), &self.msg_tx);
            }
            Cmd::CancelRecompute => self.timer.disarm(),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn render(&mut self) {
        let node = overlay::render(&self.model.state, &self.theme);
        self.portal.mount(node);
    }

    /// Open the link editor right away, bypassing the debounce
    ///
    /// Wired to the formatting view's create-link action. The triggering
    /// event is consumed.
    pub fn show_link_toolbar(&mut self, event: &mut InputEvent) {
        event.prevent_default();
        event.stop_propagation();
        self.dispatch(Msg::Toolbar(ToolbarMsg::ShowLinkToolbar));
    }

    /// Leave the link editor (its input lost focus)
    pub fn hide_link_toolbar(&mut self) {
        self.dispatch(Msg::Toolbar(ToolbarMsg::HideLinkToolbar));
    }

    /// A formatting view button was pressed
    pub fn activate(&mut self, action: FormatAction, event: &mut InputEvent) {
        if !self.model.mounted {
            tracing::debug!(action = action.label(), "toolbar not mounted, ignoring action");
            return;
        }
        if action == FormatAction::CreateLink {
            self.show_link_toolbar(event);
            return;
        }
        if let Some(props) = &self.props {
            props.editor.apply_format(action);
        }
    }

    /// The link view committed a new target (`None` removes the link)
    pub fn submit_link(&mut self, href: Option<&str>) {
        if !self.model.mounted {
            tracing::debug!(?href, "toolbar not mounted, ignoring link submit");
            return;
        }
        if let (Some(props), Some(link)) = (&self.props, &self.model.state.link) {
            props.editor.set_link_href(link.key, href);
        }
        self.hide_link_toolbar();
    }
}

impl<P: Platform, T: Timer, L: Portal> Lifecycle for ToolbarController<P, T, L> {
    type Props = ToolbarProps;

    fn on_mount(&mut self, props: ToolbarProps) {
        if self.model.config.read_only {
            tracing::debug!("read-only editor, toolbar not mounted");
            return;
        }
        if self.subscription.is_some() {
            tracing::warn!("on_mount called twice without unmount");
            return;
        }

        self.props = Some(props);
        self.model.state = ToolbarState::default();
        // Initial render with the baseline state, before any measurement
        self.render();

        let tx = self.msg_tx.clone();
        self.subscription = Some(self.pointer.subscribe(move |event| {
            let _ = tx.send(Msg::Pointer(event.into()));
        }));

        self.dispatch(Msg::Lifecycle(LifecycleMsg::Mounted));
    }

    fn on_update(&mut self, props: ToolbarProps) {
        if !self.model.mounted {
            return;
        }
        self.props = Some(props);
        self.dispatch(Msg::Lifecycle(LifecycleMsg::Updated));
    }

    fn on_unmount(&mut self) {
        if !self.model.mounted {
            return;
        }
        self.dispatch(Msg::Lifecycle(LifecycleMsg::Unmounted));
        // Dropping the handle deregisters the pointer listener
        self.subscription = None;
        self.props = None;
        // Anything still queued belongs to the disposed mount
        while self.msg_rx.try_recv().is_ok() {}
    }
}
