//! Storage module for persisting cache and output files
//!
//! This module handles all file-system writes for the tool, including:
//! - Reading and rewriting the transformation cache file
//! - Writing per-page Markdown files into the output directory
//! - Writing site-wide discovery files (the `llms.txt` manifest)

mod fs;
mod traits;

pub use fs::FsStorage;
pub use traits::{Storage, StorageError, StorageResult};
