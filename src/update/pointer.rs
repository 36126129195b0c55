//! Pointer button tracking
//!
//! `mouse_down` is written here directly rather than committed: it is only
//! read by the recomputation and never redraws the overlay by itself. A change
//! still schedules a recomputation so that releasing the button after a drag
//! brings the toolbar up.

use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::ToolbarModel;

use super::schedule_recompute;

pub fn update_pointer(model: &mut ToolbarModel, msg: PointerMsg) -> Option<Cmd> {
    let down = matches!(msg, PointerMsg::Down);
    if model.state.mouse_down == down {
        return None;
    }
    model.state.mouse_down = down;
    schedule_recompute(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> ToolbarModel {
        let mut model = ToolbarModel::default();
        model.mounted = true;
        model
    }

    #[test]
    fn test_press_and_release() {
        let mut model = mounted();

        let cmd = update_pointer(&mut model, PointerMsg::Down);
        assert!(model.state.mouse_down);
        assert!(matches!(cmd, Some(Cmd::ScheduleRecompute { .. })));

        update_pointer(&mut model, PointerMsg::Up);
        assert!(!model.state.mouse_down);
    }

    #[test]
    fn test_pointer_never_redraws() {
        let mut model = mounted();
        let cmd = update_pointer(&mut model, PointerMsg::Down).unwrap();
        assert!(!cmd.needs_redraw());
        assert_eq!(model.commits, 0);
    }

    #[test]
    fn test_repeated_press_is_noop() {
        let mut model = mounted();
        update_pointer(&mut model, PointerMsg::Down);
        assert!(update_pointer(&mut model, PointerMsg::Down).is_none());
    }
}
