//! Toolbar visibility and placement
//!
//! `recompute` re-derives the whole toolbar state from the current document
//! snapshot and platform measurements. Every failure mode is an early exit
//! that leaves the last committed state in place.

use crate::commands::Cmd;
use crate::link::find_link_in_selection;
use crate::messages::ToolbarMsg;
use crate::model::{ToolbarModel, ToolbarState};
use crate::position::place_above;

use super::{commit, Context};

pub fn update_toolbar(model: &mut ToolbarModel, msg: ToolbarMsg, ctx: &Context<'_>) -> Option<Cmd> {
    match msg {
        ToolbarMsg::RecomputeReady { generation } => {
            if !model.debounce.fire(generation) {
                tracing::trace!(generation, "skipping superseded recompute");
                return None;
            }
            recompute(model, ctx)
        }

        // The link view can still fire (e.g. its input blurring) while the
        // toolbar is torn down; a disposed toolbar never commits.
        ToolbarMsg::ShowLinkToolbar | ToolbarMsg::HideLinkToolbar if !model.mounted => {
            tracing::debug!(?msg, "toolbar not mounted, ignoring");
            None
        }

        ToolbarMsg::ShowLinkToolbar => {
            let link = ctx
                .value
                .and_then(|value| find_link_in_selection(value, &model.config.link_type));
            tracing::debug!(link = ?link.as_ref().map(|l| l.key), "show link toolbar");

            let next = ToolbarState {
                link,
                ..model.state.clone()
            };
            commit(model, next)
        }

        ToolbarMsg::HideLinkToolbar => {
            let next = ToolbarState {
                link: None,
                ..model.state.clone()
            };
            commit(model, next)
        }
    }
}

/// Recompute visibility and position, committing only on change
pub fn recompute(model: &mut ToolbarModel, ctx: &Context<'_>) -> Option<Cmd> {
    let Some(value) = ctx.value else {
        tracing::debug!("recompute: no document snapshot yet");
        return None;
    };
    let config = &model.config;

    let link = find_link_in_selection(value, &config.link_type);
    let selection = ctx.platform.text_selection();

    // The platform selection can be stale once focus leaves the editor, so
    // either source reporting a caret counts.
    let is_collapsed =
        value.is_collapsed() || selection.as_ref().map_or(true, |s| s.is_collapsed);

    if is_collapsed && link.is_none() {
        if model.state.active {
            tracing::debug!("recompute: selection collapsed, hiding toolbar");
            let next = model.state.deactivated();
            return commit(model, next);
        }
        return None;
    }

    let Some(start_block) = value.start_block() else {
        tracing::debug!("recompute: no start block");
        return None;
    };

    let mut active = true;
    if config.suppresses_block(&start_block.node_type) {
        tracing::debug!(block = %start_block.node_type, "recompute: suppressed block type");
        active = false;
    }
    // Still dragging out a selection. Link hits are deliberate and exempt.
    if model.state.mouse_down && link.is_none() {
        active = false;
    }

    let rect = match &link {
        Some(link) => ctx.platform.element_rect(link.key),
        None => selection.as_ref().and_then(|s| s.range_rect(0)),
    };
    let Some(rect) = rect else {
        tracing::debug!("recompute: nothing to measure");
        return None;
    };
    let Some(overlay) = ctx.platform.overlay_size() else {
        tracing::debug!("recompute: overlay not mounted");
        return None;
    };
    if rect.is_degenerate() {
        tracing::debug!("recompute: degenerate rect at origin");
        return None;
    }

    let position = place_above(rect, ctx.platform.scroll_offset(), overlay, config.padding);

    let next = ToolbarState {
        active,
        mouse_down: model.state.mouse_down,
        link: model.state.link.clone().or(link),
        position: Some(position),
    };
    commit(model, next)
}
