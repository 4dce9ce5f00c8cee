//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// History listing and maintenance.
pub mod history;

/// Style catalog listing.
pub mod styles;

/// Translation command handler.
pub mod translate;
