//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager};
use crate::style::{STYLES, find_style};
use crate::translation::DEFAULT_BASE_URL;
use crate::ui::{Style, handle_prompt_cancellation};

/// Prints the current configuration without prompting.
pub fn show_configure() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(manager.config_path().display())
    );
    print_current_defaults(&config);

    Ok(())
}

/// Interactively sets the default style and API base URL.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current_defaults(&config);

    config.funtl.style = Some(select_style(config.funtl.style.as_deref())?);

    let base_url = Text::new("API base URL:")
        .with_default(config.funtl.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
        .prompt()?;
    let base_url = base_url.trim().trim_end_matches('/').to_string();

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        bail!("Base URL must start with http:// or https://");
    }

    // Only persist a base URL when it differs from the public API
    config.funtl.base_url = (base_url != DEFAULT_BASE_URL).then_some(base_url);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}        {}",
        Style::label("style"),
        config.funtl.style.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("base_url"),
        config.funtl.base_url.as_deref().map_or_else(
            || format!("{} {}", DEFAULT_BASE_URL, Style::default_marker()),
            Style::value
        )
    );
    println!(
        "  {}  {}",
        Style::label("api_key_env"),
        config
            .funtl
            .api_key_env
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    if config.funtl.api_key.is_some() || config.funtl.api_key_env.is_some() {
        println!(
            "  {}      {}",
            Style::label("api_key"),
            if config.funtl.get_api_key().is_some() {
                "(set)"
            } else {
                "(not set)"
            }
        );
    }
    println!();
}

fn select_style(default: Option<&str>) -> Result<String> {
    let options: Vec<String> = STYLES
        .iter()
        .map(|s| format!("{} - {}", s.id, s.description))
        .collect();

    let default_index = default
        .and_then(find_style)
        .and_then(|d| STYLES.iter().position(|s| s.id == d.id))
        .unwrap_or(0);

    let selection = Select::new("Default style:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract id from "id - description" format
    let id = selection.split(" - ").next().unwrap_or(&selection);
    Ok(id.to_string())
}
