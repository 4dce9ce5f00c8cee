use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A completed translation kept in history.
///
/// Records are immutable once created; they only leave the history by
/// deletion or eviction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Creation time in epoch milliseconds, unique within a history list.
    pub id: String,
    /// Text as the user entered it.
    pub original: String,
    /// Text returned by the service.
    pub translated: String,
    /// Display name of the style used.
    #[serde(rename = "type")]
    pub style: String,
    pub timestamp: DateTime<Utc>,
}

impl TranslationRecord {
    pub fn new(
        id: String,
        original: impl Into<String>,
        translated: impl Into<String>,
        style: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original: original.into(),
            translated: translated.into(),
            style: style.into(),
            timestamp,
        }
    }

    /// Local date and time as `dd/mm/YYYY HH:MM`.
    pub fn formatted_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M")
            .to_string()
    }
}

/// Picks an id for a record created at `now`.
///
/// Ids are epoch milliseconds. When the newest record already holds an id
/// at or past `now` (same millisecond, or a clock step backwards), the new
/// id is bumped past it so ids stay unique and descending along the list.
pub fn next_id(now: DateTime<Utc>, newest: Option<&TranslationRecord>) -> String {
    let candidate = now.timestamp_millis();
    let floor = newest
        .and_then(|r| r.id.parse::<i64>().ok())
        .map_or(candidate, |n| n.saturating_add(1));
    candidate.max(floor).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn record(id: &str) -> TranslationRecord {
        TranslationRecord::new(id.to_string(), "hi", "ahoy", "Pirate", at(0))
    }

    #[test]
    fn test_next_id_uses_millis() {
        assert_eq!(next_id(at(1_700_000_000_123), None), "1700000000123");
    }

    #[test]
    fn test_next_id_bumps_on_collision() {
        let newest = record("1700000000123");
        assert_eq!(
            next_id(at(1_700_000_000_123), Some(&newest)),
            "1700000000124"
        );
    }

    #[test]
    fn test_next_id_bumps_when_clock_goes_back() {
        let newest = record("1700000000500");
        assert_eq!(
            next_id(at(1_700_000_000_100), Some(&newest)),
            "1700000000501"
        );
    }

    #[test]
    fn test_next_id_ignores_non_numeric_newest() {
        let newest = record("legacy-id");
        assert_eq!(next_id(at(42), Some(&newest)), "42");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(record("1")).unwrap();
        assert_eq!(json["type"], "Pirate");
        assert_eq!(json["original"], "hi");
        assert_eq!(json["translated"], "ahoy");
        assert!(json.get("style").is_none());
        assert!(json["timestamp"].as_str().unwrap().starts_with("1970-01-01T"));
    }

    #[test]
    fn test_deserialize_javascript_date_string() {
        let json = r#"{
            "id": "1700000000000",
            "original": "Hello",
            "translated": "Hello, I am",
            "type": "Yoda",
            "timestamp": "2023-11-14T22:13:20.000Z"
        }"#;
        let parsed: TranslationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.style, "Yoda");
        assert_eq!(parsed.timestamp.timestamp_millis(), 1_700_000_000_000);
    }
}
