//! Scenario simulator for the floating toolbar
//!
//! Replays a scenario file through a toolbar controller and prints every
//! committed state.

use anyhow::{anyhow, Result};
use clap::Parser;

use floatbar::cli::{CliArgs, OutputFormat};
use floatbar::sim::{self, Scenario};
use floatbar::theme::load_theme;
use floatbar::{ToolbarConfig, ToolbarTheme};

fn main() -> Result<()> {
    floatbar::tracing::init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => ToolbarConfig::load_from(path),
        None => ToolbarConfig::load(),
    };
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }

    let theme = match load_theme(&config.theme) {
        Ok(theme) => theme,
        Err(e) if args.theme.is_some() => return Err(anyhow!(e)),
        Err(e) => {
            tracing::warn!("Failed to load theme '{}': {}", config.theme, e);
            ToolbarTheme::default()
        }
    };

    let scenario = Scenario::load(&args.scenario)?;
    if let Some(name) = &scenario.name {
        tracing::info!(scenario = %name, steps = scenario.steps.len(), "replaying scenario");
    }

    let frames = sim::run(&scenario, config, theme)?;

    for frame in &frames {
        match args.format {
            OutputFormat::Text => {
                println!("{}", frame.to_text());
                if args.css {
                    println!("      {}", frame.css);
                }
            }
            OutputFormat::Json => {
                let mut value = frame.to_json();
                if args.css {
                    value["css"] = serde_json::Value::String(frame.css.clone());
                }
                println!("{}", value);
            }
        }
    }

    if frames.is_empty() && args.format == OutputFormat::Text {
        println!("(no commits)");
    }

    Ok(())
}
