//! XDG-style path utilities for configuration and data.
//!
//! XDG Base Directory variables win over OS-specific locations so the
//! layout is the same on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "funtl";

/// Returns the configuration directory for funtl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/funtl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/funtl` otherwise
pub fn config_dir() -> Result<PathBuf> {
    xdg_or_home("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the data directory for funtl (history database).
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/funtl` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/funtl` otherwise
pub fn data_dir() -> Result<PathBuf> {
    xdg_or_home("XDG_DATA_HOME", &[".local", "share"])
}

fn xdg_or_home(var: &str, fallback: &[&str]) -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var(var)
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let mut dir = dirs::home_dir().context("Failed to determine home directory")?;
    dir.extend(fallback);
    Ok(dir.join(APP_DIR))
}
