//! Persisted ledger document types.
//!
//! The document is a single JSON object holding an ordered list of version
//! records. Insertion order is meaningful: the last record is the latest
//! version regardless of how its number compares to earlier ones.

use serde::{Deserialize, Serialize};

/// One declared version and where it was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Dotted version string, kept verbatim.
    pub version: String,
    /// Full commit identifier at the time the record was written.
    pub latest_commit_id: String,
    /// ISO-8601 timestamp of the write.
    pub created_datetime: String,
}

impl VersionRecord {
    pub fn new(
        version: impl Into<String>,
        commit_id: impl Into<String>,
        created_datetime: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            latest_commit_id: commit_id.into(),
            created_datetime: created_datetime.into(),
        }
    }

    /// Overwrite the commit id and timestamp, keeping the version.
    pub fn restamp(&mut self, commit_id: &str, created_datetime: &str) {
        self.latest_commit_id = commit_id.to_string();
        self.created_datetime = created_datetime.to_string();
    }
}

/// The full ledger document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionLedger {
    pub versions: Vec<VersionRecord>,
}

impl VersionLedger {
    /// A ledger holding exactly one record.
    pub fn seeded(record: VersionRecord) -> Self {
        Self {
            versions: vec![record],
        }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// The last record by insertion order.
    pub fn latest(&self) -> Option<&VersionRecord> {
        self.versions.last()
    }

    pub fn latest_mut(&mut self) -> Option<&mut VersionRecord> {
        self.versions.last_mut()
    }

    /// Index of the first record whose version string equals `version` exactly.
    pub fn position(&self, version: &str) -> Option<usize> {
        self.versions.iter().position(|r| r.version == version)
    }

    /// Append a record; it becomes the latest.
    pub fn push(&mut self, record: VersionRecord) {
        self.versions.push(record);
    }

    /// Remove the record at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<VersionRecord> {
        if index < self.versions.len() {
            Some(self.versions.remove(index))
        } else {
            None
        }
    }

    /// Remove and return the latest record.
    pub fn pop(&mut self) -> Option<VersionRecord> {
        self.versions.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: &str) -> VersionRecord {
        VersionRecord::new(version, "abc123", "2024-01-01T00:00:00.000Z")
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let ledger = VersionLedger::seeded(record("1.0.0"));
        let json = serde_json::to_string_pretty(&ledger).unwrap();
        let expected = r#"{
  "versions": [
    {
      "version": "1.0.0",
      "latestCommitId": "abc123",
      "createdDatetime": "2024-01-01T00:00:00.000Z"
    }
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_missing_versions_is_rejected() {
        let err = serde_json::from_str::<VersionLedger>(r#"{"items": []}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_record_field_is_rejected() {
        let json = r#"{"versions": [{"version": "1.0.0", "latestCommitId": "abc"}]}"#;
        assert!(serde_json::from_str::<VersionLedger>(json).is_err());
    }

    #[test]
    fn test_latest_is_last_inserted_not_highest() {
        let mut ledger = VersionLedger::seeded(record("3.0.0"));
        ledger.push(record("1.0.0"));
        assert_eq!(ledger.latest().unwrap().version, "1.0.0");
    }

    #[test]
    fn test_position_uses_exact_string_match() {
        let mut ledger = VersionLedger::seeded(record("1.0.0"));
        ledger.push(record("1.0.1"));
        assert_eq!(ledger.position("1.0.1"), Some(1));
        assert_eq!(ledger.position("1.0.00"), None);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut ledger = VersionLedger::seeded(record("1.0.0"));
        ledger.push(record("1.0.1"));
        ledger.push(record("1.0.2"));

        let removed = ledger.remove(1).unwrap();
        assert_eq!(removed.version, "1.0.1");
        let remaining: Vec<_> = ledger.versions.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(remaining, vec!["1.0.0", "1.0.2"]);
        assert!(ledger.remove(5).is_none());
    }

    #[test]
    fn test_restamp_keeps_version() {
        let mut r = record("2.0.0");
        r.restamp("def456", "2024-02-02T00:00:00.000Z");
        assert_eq!(r.version, "2.0.0");
        assert_eq!(r.latest_commit_id, "def456");
        assert_eq!(r.created_datetime, "2024-02-02T00:00:00.000Z");
    }

    #[test]
    fn test_pop_on_empty_ledger() {
        let mut ledger = VersionLedger::default();
        assert!(ledger.is_empty());
        assert!(ledger.pop().is_none());
        assert!(ledger.latest().is_none());
    }
}
