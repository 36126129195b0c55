//! Floatbar - contextual floating toolbar for rich-text editors
//!
//! This crate provides the toolbar controller and the pieces it is built
//! from, following the Elm Architecture pattern: messages flow through
//! `update`, which mutates the model and returns commands for the
//! controller to perform.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod debounce;
pub mod document;
pub mod editor;
pub mod link;
pub mod messages;
pub mod model;
pub mod overlay;
pub mod platform;
pub mod pointer;
pub mod position;
pub mod sim;
pub mod theme;
pub mod timer;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ToolbarConfig;
pub use controller::{Lifecycle, ToolbarController, ToolbarProps};
pub use messages::Msg;
pub use model::{ToolbarModel, ToolbarState};
pub use theme::ToolbarTheme;
