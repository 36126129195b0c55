//! Toolbar themes
//!
//! YAML-based theming with compile-time embedded themes and user-defined
//! themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/floatbar/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "light", "dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<ToolbarTheme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    ToolbarTheme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<ToolbarTheme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    ToolbarTheme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// CSS color value (`#rrggbb`, or `rgba(..)` when translucent)
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    pub toolbar: ToolbarThemeData,
}

/// Toolbar colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct ToolbarThemeData {
    pub background: String,
    pub item: String,
    #[serde(default)]
    pub item_active: Option<String>,
    pub link: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarTheme {
    pub name: String,
    pub background: Color,
    pub item: Color,
    pub item_active: Color,
    pub link: Color,
}

impl Default for ToolbarTheme {
    fn default() -> Self {
        Self::from_builtin("light").unwrap_or_else(|_| Self::fallback())
    }
}

impl ToolbarTheme {
    /// Hardcoded theme used if embedded YAML fails to parse
    fn fallback() -> Self {
        Self {
            name: "Fallback".to_string(),
            background: Color::rgb(0x18, 0x1a, 0x1b),
            item: Color::rgb(0xff, 0xff, 0xff),
            item_active: Color::rgb(0x4e, 0x5c, 0x6e),
            link: Color::rgb(0x03, 0x66, 0xd6),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        Self::from_data(data)
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let builtin = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))?;
        Self::from_yaml(builtin.yaml)
    }

    fn from_data(data: ThemeData) -> Result<Self, String> {
        let item = Color::from_hex(&data.toolbar.item)?;
        let item_active = match data.toolbar.item_active {
            Some(hex) => Color::from_hex(&hex)?,
            None => item,
        };
        Ok(Self {
            name: data.name,
            background: Color::from_hex(&data.toolbar.background)?,
            item,
            item_active,
            link: Color::from_hex(&data.toolbar.link)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = ToolbarTheme::from_yaml(builtin.yaml);
            assert!(theme.is_ok(), "{} failed: {:?}", builtin.id, theme.err());
        }
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(ToolbarTheme::from_builtin("solarized").is_err());
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::from_hex("#0366D6").unwrap().to_css(), "#0366d6");
        assert_eq!(
            Color::from_hex("#00000080").unwrap().to_css(),
            "rgba(0, 0, 0, 0.502)"
        );
        assert!(Color::from_hex("#12345").is_err());
    }

    #[test]
    fn test_item_active_defaults_to_item() {
        let yaml = r##"
version: 1
name: "Minimal"
toolbar:
  background: "#000000"
  item: "#FFFFFF"
  link: "#0000FF"
"##;
        let theme = ToolbarTheme::from_yaml(yaml).unwrap();
        assert_eq!(theme.item_active, theme.item);
    }
}
