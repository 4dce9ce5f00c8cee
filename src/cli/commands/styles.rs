//! Styles command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::style::{STYLES, resolve_style};
use crate::ui::Style;

/// Lists the style catalog, marking the configured default.
pub fn list_styles() -> Result<()> {
    let default_style = ConfigManager::new()
        .map(|m| m.load_or_default())
        .ok()
        .and_then(|c| c.funtl.style);

    println!("{}", Style::header("Translation styles"));
    for style in STYLES {
        let is_default = default_style
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case(style.id));
        println!(
            "  {}  {}{}",
            Style::value(format!("{:12}", style.id)),
            Style::secondary(style.description),
            if is_default {
                format!(" {}", Style::default_marker())
            } else {
                String::new()
            }
        );
    }

    Ok(())
}

/// Shows one style in detail.
pub fn show_style(name: &str) -> Result<()> {
    let style = resolve_style(name)?;

    println!("{}", Style::header("Style"));
    println!();
    println!("  {}      {}", Style::label("Id:"), Style::value(style.id));
    println!("  {}    {}", Style::label("Name:"), style.name);
    println!(
        "  {}    {}",
        Style::label("Desc:"),
        Style::secondary(style.description)
    );
    println!("  {}  {}.json", Style::label("Endpoint:"), style.endpoint);

    Ok(())
}
