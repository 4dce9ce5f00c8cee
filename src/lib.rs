//! # funtl - Fun Translations CLI
//!
//! `funtl` rewrites English text in a playful style (Yoda, Pirate, Minion,
//! Shakespeare, Dothraki, Groot) using the Fun Translations API, and keeps
//! the last 50 translations in a local history.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate inline text
//! funtl --style yoda "You must unlearn what you have learned"
//!
//! # Translate from stdin with the configured default style
//! echo "Hello, friend" | funtl
//!
//! # Review and manage history
//! funtl history
//! funtl history delete 1700000000000
//! funtl history clear --yes
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/funtl/config.toml`:
//!
//! ```toml
//! [funtl]
//! style = "pirate"
//! api_key_env = "FUNTRANSLATIONS_API_SECRET"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Persisted translation history.
pub mod history;

/// Input reading from arguments, files and stdin.
pub mod input;

/// Global output configuration (quiet/verbose mode, colors) and logging macros.
pub mod output;

/// XDG-style path utilities for configuration and data.
pub mod paths;

/// The translation style catalog.
pub mod style;

/// Fun Translations API client.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;
