//! Model types for the Elm-style architecture
//!
//! The model is the single source of truth for the toolbar.

pub mod state;

pub use state::ToolbarState;

use crate::config::ToolbarConfig;
use crate::debounce::Debounce;

/// Toolbar state plus the bookkeeping that drives it
#[derive(Debug, Clone)]
pub struct ToolbarModel {
    /// Committed state the overlay renders from
    pub state: ToolbarState,
    /// Pending recomputation, if any
    pub debounce: Debounce,
    pub config: ToolbarConfig,
    /// Between mount and unmount
    pub mounted: bool,
    /// Number of state commits (each one is a render)
    pub commits: u64,
}

impl ToolbarModel {
    pub fn new(config: ToolbarConfig) -> Self {
        Self {
            state: ToolbarState::default(),
            debounce: Debounce::new(config.debounce()),
            config,
            mounted: false,
            commits: 0,
        }
    }
}

impl Default for ToolbarModel {
    fn default() -> Self {
        Self::new(ToolbarConfig::default())
    }
}
