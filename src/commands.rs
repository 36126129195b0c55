//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects requested by the update functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Re-render the overlay from the committed state
    RedrawOverlay,
    /// Take the overlay out of its portal layer
    RemoveOverlay,
    /// Start debounce timer for a recomputation
    /// After delay_ms, sends Msg::Toolbar(RecomputeReady { generation })
    ScheduleRecompute { generation: u64, delay_ms: u64 },
    /// Disarm the debounce timer
    CancelRecompute,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::RedrawOverlay => true,
            Cmd::RemoveOverlay => false,
            // Timers don't redraw - RecomputeReady decides that later
            Cmd::ScheduleRecompute { .. } => false,
            Cmd::CancelRecompute => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}
