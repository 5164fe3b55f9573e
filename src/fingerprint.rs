//! Content fingerprints for change detection
//!
//! A fingerprint is the hex-encoded SHA-256 digest of a page's raw content.
//! It decides whether a cached transformation is still valid; it is not an
//! integrity check against tampering.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Fixed-length digest of a content string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Returns the hex representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Fingerprint {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Computes the fingerprint of a content string
///
/// # Example
///
/// ```
/// use agent_pages::fingerprint::digest;
///
/// let a = digest("<h1>Hi</h1>");
/// assert_eq!(a, digest("<h1>Hi</h1>"));
/// assert_eq!(a.as_str().len(), 64);
/// ```
pub fn digest(content: &str) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    Fingerprint(hex::encode(hasher.finalize()))
}
