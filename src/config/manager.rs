use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fs::atomic_write;
use crate::paths;
use crate::style::{TranslationStyle, resolve_style};
use crate::translation::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "FUNTL_BASE_URL";

/// Default settings in the `[funtl]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuntlConfig {
    /// Default style id used when `--style` is not given.
    pub style: Option<String>,
    /// API root; styles are requested as `{base_url}/{endpoint}.json`.
    pub base_url: Option<String>,
    /// API secret stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API secret.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl FuntlConfig {
    /// Gets the API secret, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/funtl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub funtl: FuntlConfig,
}

/// Resolved configuration after merging CLI arguments, environment and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub style: &'static TranslationStyle,
    pub base_url: String,
    pub api_secret: Option<String>,
    pub timeout: Duration,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub style: Option<String>,
    pub base_url: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then `FUNTL_BASE_URL` (base URL only), then the
/// config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if no style is given anywhere or the style is unknown.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let style_key = options
        .style
        .as_ref()
        .or(config_file.funtl.style.as_ref())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'style'\n\n\
                 Please provide it via:\n  \
                 - CLI option: funtl --style <name> <text>\n  \
                 - Config file: run 'funtl configure' to pick a default style"
            )
        })?;

    let style = resolve_style(style_key)?;

    let base_url = options
        .base_url
        .clone()
        .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty()))
        .or_else(|| config_file.funtl.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        bail!("Invalid base URL '{base_url}': must start with http:// or https://");
    }

    let timeout = Duration::from_secs(
        config_file
            .funtl
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    );

    Ok(ResolvedConfig {
        style,
        base_url,
        api_secret: config_file.funtl.get_api_key(),
        timeout,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/funtl/config.toml`
    /// or `~/.config/funtl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents)
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("funtl").join("config.toml"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            funtl: FuntlConfig {
                style: Some("pirate".to_string()),
                base_url: Some("http://localhost:8080/translate".to_string()),
                api_key: None,
                api_key_env: Some("FUNTL_TEST_SECRET".to_string()),
                timeout_secs: Some(5),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.funtl.style, Some("pirate".to_string()));
        assert_eq!(
            loaded.funtl.base_url,
            Some("http://localhost:8080/translate".to_string())
        );
        assert_eq!(loaded.funtl.timeout_secs, Some(5));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert!(manager.load_or_default().funtl.style.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
        fs::write(manager.config_path(), "[funtl\nstyle = ").unwrap();

        assert!(manager.load().is_err());
    }

    #[test]
    #[serial]
    fn test_get_api_key_from_env() {
        // SAFETY: serialized test, test-specific variable
        unsafe { std::env::set_var("FUNTL_TEST_SECRET", "env-secret") };

        let config = FuntlConfig {
            api_key: Some("file-secret".to_string()),
            api_key_env: Some("FUNTL_TEST_SECRET".to_string()),
            ..FuntlConfig::default()
        };
        assert_eq!(config.get_api_key(), Some("env-secret".to_string()));

        unsafe { std::env::remove_var("FUNTL_TEST_SECRET") };
    }

    #[test]
    #[serial]
    fn test_get_api_key_fallback() {
        unsafe { std::env::remove_var("FUNTL_TEST_MISSING_SECRET") };

        let config = FuntlConfig {
            api_key: Some("file-secret".to_string()),
            api_key_env: Some("FUNTL_TEST_MISSING_SECRET".to_string()),
            ..FuntlConfig::default()
        };
        assert_eq!(config.get_api_key(), Some("file-secret".to_string()));
    }

    #[test]
    #[serial]
    fn test_resolve_config_defaults() {
        unsafe { std::env::remove_var(BASE_URL_ENV) };

        let options = ResolveOptions {
            style: Some("yoda".to_string()),
            base_url: None,
        };
        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();

        assert_eq!(resolved.style.id, "yoda");
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(resolved.api_secret.is_none());
    }

    #[test]
    fn test_resolve_config_missing_style() {
        let result = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

        assert!(result.unwrap_err().to_string().contains("'style'"));
    }

    #[test]
    fn test_resolve_config_unknown_style() {
        let options = ResolveOptions {
            style: Some("klingon".to_string()),
            base_url: None,
        };
        let result = resolve_config(&options, &ConfigFile::default());

        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_resolve_config_rejects_non_http_base_url() {
        let options = ResolveOptions {
            style: Some("yoda".to_string()),
            base_url: Some("ftp://example.com".to_string()),
        };
        let result = resolve_config(&options, &ConfigFile::default());

        assert!(result.unwrap_err().to_string().contains("Invalid base URL"));
    }
}
