//! Translation style catalog.
//!
//! Each style is a persona served by its own Fun Translations endpoint.
//! The catalog is fixed at compile time and never modified.

use thiserror::Error;

/// A translation style (hardcoded, not modifiable by users).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStyle {
    /// The style key (e.g., "yoda", "pirate").
    pub id: &'static str,
    /// Display name, also stored in history records.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Remote endpoint name, requested as `{base_url}/{endpoint}.json`.
    pub endpoint: &'static str,
}

/// All available styles.
pub const STYLES: &[TranslationStyle] = &[
    TranslationStyle {
        id: "yoda",
        name: "Yoda",
        description: "Speak like Master Yoda from Star Wars",
        endpoint: "yoda",
    },
    TranslationStyle {
        id: "pirate",
        name: "Pirate",
        description: "Talk like a pirate",
        endpoint: "pirate",
    },
    TranslationStyle {
        id: "minion",
        name: "Minion",
        description: "Banana-fueled Minion speak",
        endpoint: "minion",
    },
    TranslationStyle {
        id: "shakespeare",
        name: "Shakespeare",
        description: "Shakespearean English",
        endpoint: "shakespeare",
    },
    TranslationStyle {
        id: "dothraki",
        name: "Dothraki",
        description: "Dothraki from Game of Thrones",
        endpoint: "dothraki",
    },
    TranslationStyle {
        id: "groot",
        name: "Groot",
        description: "The language of Groot",
        endpoint: "groot",
    },
];

/// Style lookup errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("Style '{0}' not found\n\nAvailable styles: {styles}", styles = style_ids().join(", "))]
    NotFound(String),
}

/// Returns the ids of all styles in catalog order.
pub fn style_ids() -> Vec<&'static str> {
    STYLES.iter().map(|s| s.id).collect()
}

/// Looks up a style by id or display name, ignoring ASCII case.
pub fn find_style(key: &str) -> Option<&'static TranslationStyle> {
    let key = key.trim();
    STYLES
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(key) || s.name.eq_ignore_ascii_case(key))
}

/// Resolves a style key, returning an error that lists the catalog if missing.
pub fn resolve_style(key: &str) -> Result<&'static TranslationStyle, StyleError> {
    find_style(key).ok_or_else(|| StyleError::NotFound(key.to_string()))
}
