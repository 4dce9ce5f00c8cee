use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::history::{HistoryStore, KeyValueStore, SqliteStore, TranslationRecord};
use crate::input::{InputReader, InputSource};
use crate::translation::{TranslationClient, validate_input};
use crate::ui::Spinner;
use crate::{debug, warn};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub style: Option<String>,
    pub base_url: Option<String>,
    pub no_history: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_resolved_config(&options)?;

    let source_text = InputReader::read(InputSource::select(
        options.text.as_deref(),
        options.file.as_deref(),
    ))?;

    // Checked before the client exists so blank input never reaches the network.
    validate_input(&source_text)?;

    let client = TranslationClient::new(
        config.base_url.clone(),
        config.api_secret.clone(),
        config.timeout,
    )?;

    debug!(
        "POST {} ({} bytes)",
        client.endpoint_url(config.style.endpoint),
        source_text.len()
    );

    let spinner = Spinner::new(&format!("Translating to {}...", config.style.name));
    let result = client.translate(&source_text, config.style.endpoint).await;
    spinner.stop();

    let translated = result.inspect_err(|e| {
        if let Some(detail) = e.detail() {
            debug!("{detail}");
        }
    })?;

    println!("{translated}");

    if !options.no_history {
        match SqliteStore::open_default() {
            Ok(store) => {
                save_to_history(
                    &HistoryStore::new(store),
                    &source_text,
                    &translated,
                    config.style.name,
                );
            }
            Err(e) => warn!("History unavailable: {e:#}"),
        }
    }

    Ok(())
}

/// Records a finished translation. Storage failures are reported and
/// otherwise ignored so a good translation is never lost to them.
pub fn save_to_history<S: KeyValueStore>(
    history: &HistoryStore<S>,
    original: &str,
    translated: &str,
    style_name: &str,
) -> Option<TranslationRecord> {
    match history.record(original, translated, style_name) {
        Ok(record) => {
            debug!("Saved to history as {}", record.id);
            Some(record)
        }
        Err(e) => {
            warn!("Failed to save translation to history: {e:#}");
            None
        }
    }
}

fn load_resolved_config(options: &TranslateOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    resolve_config(
        &ResolveOptions {
            style: options.style.clone(),
            base_url: options.base_url.clone(),
        },
        &file_config,
    )
}
