//! History entry and snapshot types.

use crate::error::{Error, Result};
use crate::summary::extract_summary;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// One past topic analysis. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier.
    pub id: String,

    /// Topic as submitted by the user.
    pub topic: String,

    /// Full response text from the model.
    pub response: String,

    /// Creation time, stored as Unix milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,

    /// Short preview derived from the response.
    pub summary: String,
}

impl HistoryEntry {
    /// Create an entry with a fresh id, the current time and a derived summary.
    #[must_use]
    pub fn new(topic: &str, response: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            response: response.to_string(),
            // Millisecond precision, matching the stored format
            timestamp: Utc::now().trunc_subsecs(3),
            summary: extract_summary(response),
        }
    }
}

/// The full ordered collection, newest first. The unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    /// Entries, newest first.
    pub entries: Vec<HistoryEntry>,
}

impl Snapshot {
    /// Wrap an ordered entry list.
    #[must_use]
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Serialize to the stored JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored JSON payload and check its shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a list of entries, or if any
    /// entry has an empty or duplicate id.
    pub fn from_json(payload: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(payload)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if entry.id.is_empty() {
                return Err(Error::InvalidSnapshot("entry with empty id".to_string()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::InvalidSnapshot(format!(
                    "duplicate entry id {}",
                    entry.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_derives_summary() {
        let entry = HistoryEntry::new("Photosynthesis", "## Summary\nPlants eat light.\n## More");
        assert_eq!(entry.topic, "Photosynthesis");
        assert_eq!(entry.summary, "Plants eat light.");
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn new_entries_have_distinct_ids() {
        let a = HistoryEntry::new("t", "r");
        let b = HistoryEntry::new("t", "r");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn timestamp_serializes_as_millis() {
        let mut entry = HistoryEntry::new("t", "r");
        entry.timestamp = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timestamp"], 1_700_000_000_123_i64);
    }

    #[test]
    fn snapshot_is_a_plain_array() {
        let snapshot = Snapshot::new(vec![HistoryEntry::new("t", "r")]);
        let json = snapshot.to_json().unwrap();
        assert!(json.starts_with('['));
    }

    #[test]
    fn snapshot_round_trip_preserves_order() {
        let snapshot = Snapshot::new(vec![
            HistoryEntry::new("newest", "r1"),
            HistoryEntry::new("middle", "r2"),
            HistoryEntry::new("oldest", "r3"),
        ]);
        let restored = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn accepts_millisecond_timestamp_payload() {
        let payload = r#"[{"id":"a1","topic":"SWOT","response":"text","timestamp":1717000000000,"summary":"s"}]"#;
        let snapshot = Snapshot::from_json(payload).unwrap();
        assert_eq!(snapshot.entries[0].id, "a1");
        assert_eq!(snapshot.entries[0].timestamp.timestamp_millis(), 1_717_000_000_000);
    }

    #[test]
    fn rejects_non_array() {
        assert!(Snapshot::from_json(r#"{"id":"x"}"#).is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(Snapshot::from_json(r#"[{"id":"x","topic":"t"}]"#).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let entry = HistoryEntry::new("t", "r");
        let payload = Snapshot::new(vec![entry.clone(), entry]).to_json().unwrap();
        assert!(matches!(
            Snapshot::from_json(&payload),
            Err(Error::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn rejects_empty_id() {
        let mut entry = HistoryEntry::new("t", "r");
        entry.id = String::new();
        let payload = Snapshot::new(vec![entry]).to_json().unwrap();
        assert!(matches!(
            Snapshot::from_json(&payload),
            Err(Error::InvalidSnapshot(_))
        ));
    }
}
