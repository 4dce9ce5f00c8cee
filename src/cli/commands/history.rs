//! History command handlers.
//!
//! Storage problems are reported as warnings; the commands themselves
//! still succeed, matching how translation saves are treated.

use anyhow::Result;

use crate::history::{HistoryStore, KeyValueStore, SqliteStore, TranslationRecord};
use crate::ui::{Style, confirm, handle_prompt_cancellation};
use crate::{status, warn};

fn open_history() -> Option<HistoryStore<SqliteStore>> {
    match SqliteStore::open_default() {
        Ok(store) => Some(HistoryStore::new(store)),
        Err(e) => {
            warn!("History unavailable: {e:#}");
            None
        }
    }
}

/// Prints past translations, newest first.
pub fn list_history() -> Result<()> {
    let records = open_history().map(|h| load_or_empty(&h)).unwrap_or_default();

    if records.is_empty() {
        println!("No translations yet.");
        println!("Your translations will appear here, e.g. funtl --style yoda \"Hello there\"");
        return Ok(());
    }

    println!("{}", Style::header("History"));
    for record in &records {
        println!();
        print_record(record);
    }

    Ok(())
}

/// Loads history, degrading to an empty list on storage errors.
pub fn load_or_empty<S: KeyValueStore>(history: &HistoryStore<S>) -> Vec<TranslationRecord> {
    history.load().unwrap_or_else(|e| {
        warn!("Failed to load history: {e:#}");
        Vec::new()
    })
}

fn print_record(record: &TranslationRecord) {
    println!(
        "  {}  {}  {}",
        Style::value(record.style.to_uppercase()),
        Style::secondary(record.formatted_time()),
        Style::label(format!("#{}", record.id))
    );
    println!("  \"{}\"", record.original);
    println!("  {}", Style::translated(format!("\"{}\"", record.translated)));
}

/// Deletes one entry. Accepts the id with or without the `#` shown in listings.
pub fn delete_entry(id: &str) -> Result<()> {
    let Some(history) = open_history() else {
        return Ok(());
    };

    let id = normalize_id(id);

    match history.delete(id) {
        Ok(true) => status!("{} Deleted entry {}", Style::success("✓"), Style::value(id)),
        Ok(false) => status!("No history entry with id {}", Style::value(id)),
        Err(e) => warn!("Failed to delete history entry: {e:#}"),
    }

    Ok(())
}

fn normalize_id(id: &str) -> &str {
    let id = id.trim();
    id.strip_prefix('#').unwrap_or(id)
}

/// Clears all history after confirmation.
pub fn clear_history(yes: bool) -> Result<()> {
    handle_prompt_cancellation(|| clear_history_inner(yes))
}

fn clear_history_inner(yes: bool) -> Result<()> {
    let Some(history) = open_history() else {
        return Ok(());
    };

    // An unreadable list still gets cleared; clearing is how it is repaired.
    match history.load() {
        Ok(records) if records.is_empty() => {
            status!("History is already empty");
            return Ok(());
        }
        Ok(_) => {}
        Err(e) => warn!("Stored history is unreadable and will be discarded: {e:#}"),
    }

    if !confirm("Delete the entire translation history?", yes)? {
        println!("Cancelled");
        return Ok(());
    }

    match history.clear() {
        Ok(()) => status!("{} History cleared", Style::success("✓")),
        Err(e) => warn!("Failed to clear history: {e:#}"),
    }

    Ok(())
}
