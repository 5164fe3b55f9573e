//! Transformation cache keyed by content fingerprint
//!
//! A page is re-transformed only when its raw content changes. Records live in
//! a single JSON file under the tool's cache directory.

mod record;
mod store;

pub use record::CacheRecord;
pub use store::CacheStore;
