//! Configuration system tests
//!
//! Tests for config paths and toolbar config loading/saving.

use std::time::Duration;

use floatbar::config::ToolbarConfig;
use floatbar::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_ends_with_app_dir() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.ends_with("floatbar"), "got: {}", dir.display());
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_themes_and_logs_are_subdirs_of_config() {
    if let Some(config) = config_paths::config_dir() {
        assert!(config_paths::themes_dir().unwrap().starts_with(&config));
        assert!(config_paths::logs_dir().unwrap().starts_with(&config));
    }
}

// ========================================================================
// Toolbar Config Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = ToolbarConfig::default();
    assert_eq!(config.debounce(), Duration::from_millis(100));
    assert_eq!(config.padding, 16.0);
    assert_eq!(config.link_type, "link");
    assert_eq!(config.theme, "light");
    assert!(!config.read_only);
}

#[test]
fn test_suppressed_block_types() {
    let config = ToolbarConfig::default();
    assert!(config.suppresses_block("heading1"));
    assert!(config.suppresses_block("code"));
    assert!(config.suppresses_block("code_block"));
    assert!(config.suppresses_block("inline-code-line"));
    assert!(!config.suppresses_block("heading2"));
    assert!(!config.suppresses_block("paragraph"));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = ToolbarConfig {
        debounce_ms: 250,
        theme: "dark".to_string(),
        read_only: true,
        ..ToolbarConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(ToolbarConfig::load_from(&path), config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "padding: 24\n").unwrap();

    let config = ToolbarConfig::load_from(&path);
    assert_eq!(config.padding, 24.0);
    assert_eq!(config.debounce_ms, 100);
    assert_eq!(config.title_block_type, "heading1");
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ToolbarConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, ToolbarConfig::default());
}

#[test]
fn test_malformed_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "debounce_ms: [not, a, number]\n").unwrap();

    assert_eq!(ToolbarConfig::load_from(&path), ToolbarConfig::default());
}
