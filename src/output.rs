//! Global output configuration and logging macros.
//!
//! - Translations go to stdout (for piping)
//! - Status messages, warnings and diagnostics go to stderr
//! - Quiet mode suppresses everything except warnings and errors
//! - Colors can be disabled via flag or `NO_COLOR` environment variable

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Print diagnostic detail (e.g. the cause of a failed request).
    pub verbose: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            // https://no-color.org/
            no_color: std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty()),
        }
    }
}

impl OutputConfig {
    /// Builds the configuration from CLI flags, honouring `NO_COLOR`.
    pub fn from_flags(quiet: bool, verbose: bool, no_color: bool) -> Self {
        let defaults = Self::default();
        Self {
            quiet,
            verbose: verbose && !quiet,
            no_color: no_color || defaults.no_color,
        }
    }
}

/// Initialize the global output configuration.
///
/// Called once at startup; later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_verbose() -> bool {
    config().verbose
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a diagnostic message to stderr (only with `--verbose`).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::output::is_verbose() {
            eprintln!("{} {}", $crate::ui::Style::secondary("debug:"), format_args!($($arg)*));
        }
    };
}

/// Print a warning to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("{} {}", $crate::ui::Style::warning("Warning:"), format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_default_is_not_quiet() {
        let config = OutputConfig::default();
        assert!(!config.quiet);
        assert!(!config.verbose);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let config = OutputConfig::from_flags(true, true, false);
        assert!(config.quiet);
        assert!(!config.verbose);
    }

    #[test]
    fn test_no_color_flag() {
        assert!(OutputConfig::from_flags(false, false, true).no_color);
    }
}
