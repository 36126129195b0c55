use floatbar::model::ToolbarState;
use floatbar::overlay;
use floatbar::position::OverlayPosition;
use floatbar::theme::{from_file, Color, ToolbarTheme, BUILTIN_THEMES, DARK_YAML, LIGHT_YAML};

#[test]
fn test_color_from_hex_6() {
    let color = Color::from_hex("#181A1B").unwrap();
    assert_eq!(color, Color::rgb(0x18, 0x1a, 0x1b));
    assert_eq!(color.to_css(), "#181a1b");
}

#[test]
fn test_color_from_hex_8() {
    let color = Color::from_hex("#00000080").unwrap();
    assert_eq!(color.a, 0x80);
    assert_eq!(color.to_css(), "rgba(0, 0, 0, 0.502)");
}

#[test]
fn test_invalid_hex_is_rejected() {
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
    assert!(Color::from_hex("#ééé").is_err());
}

#[test]
fn test_builtin_registry() {
    let ids: Vec<&str> = BUILTIN_THEMES.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["light", "dark"]);
}

#[test]
fn test_light_and_dark_differ() {
    let light = ToolbarTheme::from_yaml(LIGHT_YAML).unwrap();
    let dark = ToolbarTheme::from_yaml(DARK_YAML).unwrap();
    assert_eq!(light.name, "Light");
    assert_eq!(dark.name, "Dark");
    assert_ne!(light.background, dark.background);
}

#[test]
fn test_default_theme_is_light() {
    assert_eq!(ToolbarTheme::default().name, "Light");
}

#[test]
fn test_unknown_builtin() {
    assert!(ToolbarTheme::from_builtin("solarized").is_err());
}

#[test]
fn test_theme_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mine.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: Mine\ntoolbar:\n  background: \"#102030\"\n  item: \"#FFFFFF\"\n  link: \"#0000FF\"\n",
    )
    .unwrap();

    let theme = from_file(&path).unwrap();
    assert_eq!(theme.name, "Mine");
    // item_active falls back to item
    assert_eq!(theme.item_active, theme.item);
}

#[test]
fn test_overlay_uses_theme_background() {
    let state = ToolbarState {
        active: true,
        mouse_down: false,
        link: None,
        position: Some(OverlayPosition { top: 10, left: 20 }),
    };
    let dark = ToolbarTheme::from_builtin("dark").unwrap();
    let css = overlay::render(&state, &dark).style.to_css();
    assert!(css.contains("background-color: #ffffff"));
}
