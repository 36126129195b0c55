//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging toolbar
//! state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=toolbar=debug` - state transitions only
//! - `RUST_LOG=floatbar::update=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/floatbar/logs/floatbar.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::ToolbarState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// it never mixes with simulator output. File logging is always debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "floatbar.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of toolbar state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub active: bool,
    pub mouse_down: bool,
    pub link: Option<u64>,
    pub top: String,
    pub left: String,
}

impl StateSnapshot {
    pub fn from_state(state: &ToolbarState) -> Self {
        Self {
            active: state.active,
            mouse_down: state.mouse_down,
            link: state.link.as_ref().map(|l| l.key.0),
            top: state.top(),
            left: state.left(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.active != other.active {
            changes.push(format!("active: {} → {}", self.active, other.active));
        }
        if self.mouse_down != other.mouse_down {
            changes.push(format!(
                "mouse_down: {} → {}",
                self.mouse_down, other.mouse_down
            ));
        }
        if self.link != other.link {
            let show = |link: Option<u64>| link.map_or("none".to_string(), |k| format!("#{}", k));
            changes.push(format!("link: {} → {}", show(self.link), show(other.link)));
        }
        if self.top != other.top || self.left != other.left {
            changes.push(format!(
                "position: ({}, {}) → ({}, {})",
                display_px(&self.top),
                display_px(&self.left),
                display_px(&other.top),
                display_px(&other.left)
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn display_px(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
