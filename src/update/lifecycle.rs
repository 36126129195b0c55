//! Mount/update/unmount handling

use crate::commands::Cmd;
use crate::messages::LifecycleMsg;
use crate::model::ToolbarModel;

use super::schedule_recompute;

pub fn update_lifecycle(model: &mut ToolbarModel, msg: LifecycleMsg) -> Option<Cmd> {
    match msg {
        LifecycleMsg::Mounted => {
            if model.mounted {
                tracing::debug!("toolbar already mounted, ignoring");
                return None;
            }
            model.mounted = true;
            schedule_recompute(model)
        }

        LifecycleMsg::Updated => schedule_recompute(model),

        LifecycleMsg::Unmounted => {
            if !model.mounted {
                return None;
            }
            model.mounted = false;
            if model.debounce.cancel() {
                tracing::debug!("cancelled pending recompute on unmount");
            }
            Some(Cmd::batch(vec![Cmd::CancelRecompute, Cmd::RemoveOverlay]))
        }
    }
}
