//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storage backend implementations
///
/// A backend owns two scopes: the tool's cache file, and the site's public
/// directory tree (the output directory plus its parent, the site root).
pub trait Storage: Send + Sync {
    // ===== Cache =====

    /// Reads the persisted cache file
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - File contents
    /// * `Ok(None)` - No cache has been written yet
    fn read_cache(&self) -> StorageResult<Option<String>>;

    /// Replaces the persisted cache file with `contents`
    fn write_cache(&self, contents: &str) -> StorageResult<()>;

    // ===== Output =====

    /// Writes a file into the output directory, returning its path
    ///
    /// # Arguments
    ///
    /// * `file_name` - Bare file name (no directory components)
    /// * `contents` - Text to write
    fn write_output(&self, file_name: &str, contents: &str) -> StorageResult<PathBuf>;

    /// Writes a file into the site root (the parent of the output directory)
    fn write_site_file(&self, file_name: &str, contents: &str) -> StorageResult<PathBuf>;
}
