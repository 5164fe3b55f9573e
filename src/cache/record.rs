use crate::fingerprint::Fingerprint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cached transformation, keyed by page identifier in the cache file
///
/// Serialized as `{hash, content, timestamp, polishContent?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Fingerprint of the raw content the transformation was derived from
    #[serde(rename = "hash")]
    pub fingerprint: Fingerprint,

    /// Raw page body, kept for debugging (empty when disabled)
    #[serde(default)]
    pub content: String,

    /// When the record was captured
    #[serde(rename = "timestamp")]
    pub captured_at: DateTime<Utc>,

    /// Transformed output
    #[serde(
        rename = "polishContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transformed: Option<String>,
}

impl CacheRecord {
    /// Returns the transformed output if it is usable as a cache hit
    pub fn usable_output(&self) -> Option<&str> {
        self.transformed.as_deref().filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::digest;

    #[test]
    fn test_deserialize_external_layout() {
        let json = r##"{
            "hash": "abc",
            "content": "<html></html>",
            "timestamp": "2025-01-01T12:00:00.000Z",
            "polishContent": "# Witaj"
        }"##;
        let record: CacheRecord = serde_json::from_str(json).unwrap();

        assert!(record.fingerprint == *"abc");
        assert_eq!(record.content, "<html></html>");
        assert_eq!(record.usable_output(), Some("# Witaj"));
    }

    #[test]
    fn test_missing_transformed_field() {
        let json = r#"{"hash": "abc", "content": "", "timestamp": "2025-01-01T12:00:00Z"}"#;
        let record: CacheRecord = serde_json::from_str(json).unwrap();
        assert!(record.transformed.is_none());
        assert_eq!(record.usable_output(), None);
    }

    #[test]
    fn test_empty_output_is_not_usable() {
        let record = CacheRecord {
            fingerprint: digest("x"),
            content: String::new(),
            captured_at: Utc::now(),
            transformed: Some(String::new()),
        };
        assert_eq!(record.usable_output(), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let record = CacheRecord {
            fingerprint: digest("x"),
            content: "x".to_string(),
            captured_at: Utc::now(),
            transformed: Some("# out".to_string()),
        };
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["hash"], digest("x").as_str());
        assert_eq!(value["polishContent"], "# out");
        assert!(value["timestamp"].is_string());
    }
}
