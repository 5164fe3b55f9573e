//! Content-addressed transformation cache
//!
//! The whole mapping is loaded once and rewritten in full after every
//! [`CacheStore::store`]. This is fine for a site's worth of pages; it is not
//! safe for two processes sharing one cache file (last writer wins).

use crate::cache::record::CacheRecord;
use crate::fingerprint::digest;
use crate::storage::{Storage, StorageResult};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Persisted mapping from page identifier to [`CacheRecord`]
pub struct CacheStore {
    storage: Arc<dyn Storage>,
    records: BTreeMap<String, CacheRecord>,
    keep_raw_content: bool,
}

impl CacheStore {
    /// Loads the persisted mapping
    ///
    /// A missing cache starts empty. An unreadable or unparseable cache is
    /// logged and also starts empty; the cache never fails a run.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let records = match storage.read_cache() {
            Ok(Some(contents)) => match serde_json::from_str(&contents) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Failed to parse cache, starting fresh: {}", e);
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to load cache, starting fresh: {}", e);
                BTreeMap::new()
            }
        };

        tracing::debug!("Loaded {} cache records", records.len());

        Self {
            storage,
            records,
            keep_raw_content: true,
        }
    }

    /// Sets whether raw page bodies are persisted next to each record
    pub fn with_raw_content(mut self, keep: bool) -> Self {
        self.keep_raw_content = keep;
        self
    }

    /// Looks up the transformed output for a page
    ///
    /// Returns the cached output only when the stored fingerprint matches
    /// `raw_content` and the stored output is non-empty.
    pub fn lookup(&self, page_id: &str, raw_content: &str) -> Option<&str> {
        let record = self.records.get(page_id)?;
        let fingerprint = digest(raw_content);

        if record.fingerprint != fingerprint {
            tracing::debug!("Cache stale for {}: content changed", page_id);
            return None;
        }

        record.usable_output()
    }

    /// Records a transformation and persists the full mapping
    ///
    /// The record is durable once this returns `Ok`.
    pub fn store(
        &mut self,
        page_id: &str,
        raw_content: &str,
        transformed: &str,
    ) -> StorageResult<()> {
        let record = CacheRecord {
            fingerprint: digest(raw_content),
            content: if self.keep_raw_content {
                raw_content.to_string()
            } else {
                String::new()
            },
            captured_at: Utc::now(),
            transformed: Some(transformed.to_string()),
        };

        self.records.insert(page_id.to_string(), record);
        self.persist()
    }

    /// Returns the record for a page, if any
    pub fn get(&self, page_id: &str) -> Option<&CacheRecord> {
        self.records.get(page_id)
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no records are held
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        self.storage.write_cache(&json)
    }
}
