//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod lifecycle;
mod pointer;
mod toolbar;

use crate::commands::Cmd;
use crate::document::DocumentSelection;
use crate::messages::Msg;
use crate::model::{ToolbarModel, ToolbarState};
use crate::platform::Platform;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use lifecycle::update_lifecycle;
pub use pointer::update_pointer;
pub use toolbar::{recompute, update_toolbar};

/// Inputs read (never written) while handling a message
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Latest document/selection snapshot from the host, if any
    pub value: Option<&'a dyn DocumentSelection>,
    pub platform: &'a dyn Platform,
}

impl<'a> Context<'a> {
    pub fn new(value: Option<&'a dyn DocumentSelection>, platform: &'a dyn Platform) -> Self {
        Self { value, platform }
    }
}

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut ToolbarModel, msg: Msg, ctx: &Context<'_>) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg, ctx)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg, ctx)
    }
}

fn update_inner(model: &mut ToolbarModel, msg: Msg, ctx: &Context<'_>) -> Option<Cmd> {
    match msg {
        Msg::Lifecycle(m) => lifecycle::update_lifecycle(model, m),
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Toolbar(m) => toolbar::update_toolbar(model, m, ctx),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after toolbar state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut ToolbarModel, msg: Msg, ctx: &Context<'_>) -> Option<Cmd> {
    let _span = span!(Level::DEBUG, "update", msg = ?msg).entered();
    let before = StateSnapshot::from_state(&model.state);

    let result = update_inner(model, msg, ctx);

    if let Some(diff) = before.diff(&StateSnapshot::from_state(&model.state)) {
        debug!(target: "toolbar", %diff, "state changed");
    }
    model.state.assert_invariants();

    result
}

/// Arm the debounce and ask the runtime for a wakeup
///
/// Returns `None` while unmounted: nothing may be scheduled against a
/// disposed toolbar.
pub fn schedule_recompute(model: &mut ToolbarModel) -> Option<Cmd> {
    if !model.mounted {
        return None;
    }
    let generation = model.debounce.arm();
    let delay_ms = u64::try_from(model.debounce.delay().as_millis()).unwrap_or(u64::MAX);
    Some(Cmd::ScheduleRecompute {
        generation,
        delay_ms,
    })
}

/// Replace the committed state unless it is structurally unchanged
fn commit(model: &mut ToolbarModel, next: ToolbarState) -> Option<Cmd> {
    if model.state == next {
        tracing::trace!("state unchanged, skipping commit");
        return None;
    }
    model.state = next;
    model.commits += 1;
    Some(Cmd::RedrawOverlay)
}
