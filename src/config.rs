//! Toolbar configuration persistence
//!
//! Stores preferences in `~/.config/floatbar/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::debounce::RECOMPUTE_DEBOUNCE_MS;
use crate::position::DEFAULT_PADDING;

/// Toolbar configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Quiet period before a recomputation runs
    pub debounce_ms: u64,
    /// Minimum distance from the viewport's left edge
    pub padding: f64,
    /// Inline type tag identifying hyperlinks
    pub link_type: String,
    /// Block type of the document title line
    pub title_block_type: String,
    /// Any block type containing this marker is treated as code
    pub code_type_marker: String,
    /// Selected theme id (e.g. "light", "dark")
    pub theme: String,
    /// Read-only editors never mount the toolbar
    pub read_only: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            debounce_ms: RECOMPUTE_DEBOUNCE_MS,
            padding: DEFAULT_PADDING,
            link_type: "link".to_string(),
            title_block_type: "heading1".to_string(),
            code_type_marker: "code".to_string(),
            theme: "light".to_string(),
            read_only: false,
        }
    }
}

impl ToolbarConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Whether formatting controls are suppressed for a block type
    pub fn suppresses_block(&self, block_type: &str) -> bool {
        block_type == self.title_block_type || block_type.contains(&self.code_type_marker)
    }

    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config dir
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
