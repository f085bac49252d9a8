//! On-disk shape of the store: one JSON object with presets and history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{HistoryEntry, Preset};

/// Maximum number of history entries kept; older ones are dropped on insert.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub presets: BTreeMap<String, Preset>,
    /// Newest first.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl StoreDocument {
    /// Prepends `entry` and truncates to [`HISTORY_LIMIT`].
    pub fn push_history(&mut self, entry: HistoryEntry) {
        self.history.insert(0, entry);
        self.history.truncate(HISTORY_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(ts: i64) -> HistoryEntry {
        HistoryEntry {
            url: format!("https://www.acme.com/global/cookie/set/{ts}"),
            timestamp: ts,
            brand: "acme".to_string(),
            tld: "com".to_string(),
        }
    }

    #[test]
    fn push_history_keeps_newest_first() {
        let mut doc = StoreDocument::default();
        doc.push_history(entry(1));
        doc.push_history(entry(2));
        assert_eq!(doc.history[0].timestamp, 2);
        assert_eq!(doc.history[1].timestamp, 1);
    }

    #[test]
    fn push_history_evicts_oldest_beyond_limit() {
        let mut doc = StoreDocument::default();
        for ts in 0..(HISTORY_LIMIT as i64 + 5) {
            doc.push_history(entry(ts));
            assert!(doc.history.len() <= HISTORY_LIMIT);
        }
        assert_eq!(doc.history.len(), HISTORY_LIMIT);
        assert_eq!(doc.history.first().unwrap().timestamp, HISTORY_LIMIT as i64 + 4);
        assert_eq!(doc.history.last().unwrap().timestamp, 5);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let doc: StoreDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.presets.is_empty());
        assert!(doc.history.is_empty());
    }
}
