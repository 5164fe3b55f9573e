//! Output module for generated files
//!
//! This module handles:
//! - Naming and writing one Markdown file per generated page
//! - Generating the `llms.txt` manifest and the robots.txt snippet
//! - Summarizing the build for the console

mod manifest;
mod markdown;
mod report;

pub use manifest::{
    format_manifest, format_robots_snippet, MANIFEST_FILE_NAME, MANIFEST_HEADING,
    ROBOTS_SNIPPET_FILE_NAME,
};
pub use markdown::{page_file_name, public_url};
pub use report::{format_summary, print_summary, BuildReport, FailedPage, GeneratedPage};

use crate::storage::{Storage, StorageResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Paths and text produced by [`OutputWriter::write_discovery_files`]
#[derive(Debug, Clone)]
pub struct DiscoveryFiles {
    /// Where `llms.txt` was written
    pub manifest_path: PathBuf,

    /// Where the robots snippet was written
    pub robots_snippet_path: PathBuf,

    /// Snippet text, for printing
    pub robots_snippet: String,
}

/// Writes page files and discovery artifacts through a [`Storage`] backend
pub struct OutputWriter {
    storage: Arc<dyn Storage>,
    public_path: String,
}

impl OutputWriter {
    /// Creates a writer publishing files under `public_path` (e.g. `/ai`)
    pub fn new(storage: Arc<dyn Storage>, public_path: impl Into<String>) -> Self {
        Self {
            storage,
            public_path: public_path.into(),
        }
    }

    /// Writes the Markdown file for one page
    ///
    /// # Returns
    ///
    /// * `Ok(GeneratedPage)` - Entry for the manifest
    /// * `Err(StorageError)` - The file could not be written
    pub fn save_page(
        &self,
        page_id: &str,
        content: &str,
        from_cache: bool,
    ) -> StorageResult<GeneratedPage> {
        let file_name = page_file_name(page_id);
        let path = self.storage.write_output(&file_name, content)?;

        Ok(GeneratedPage {
            page_id: page_id.to_string(),
            file_name,
            path,
            from_cache,
        })
    }

    /// Regenerates `llms.txt` and the robots snippet from `pages`
    pub fn write_discovery_files(&self, pages: &[GeneratedPage]) -> StorageResult<DiscoveryFiles> {
        let manifest = format_manifest(pages, &self.public_path);
        let manifest_path = self.storage.write_site_file(MANIFEST_FILE_NAME, &manifest)?;

        let robots_snippet = format_robots_snippet(pages, &self.public_path);
        let robots_snippet_path = self
            .storage
            .write_output(ROBOTS_SNIPPET_FILE_NAME, &robots_snippet)?;

        Ok(DiscoveryFiles {
            manifest_path,
            robots_snippet_path,
            robots_snippet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FsStorage;
    use tempfile::TempDir;

    fn create_test_writer(dir: &TempDir) -> OutputWriter {
        let storage = FsStorage::new(
            dir.path().join("cache"),
            dir.path().join("public").join("ai"),
            dir.path().join("public"),
        );
        OutputWriter::new(Arc::new(storage), "/ai")
    }

    #[test]
    fn test_save_page() {
        let dir = TempDir::new().unwrap();
        let writer = create_test_writer(&dir);

        let page = writer.save_page("/docs/intro", "# Wstęp", false).unwrap();

        assert_eq!(page.file_name, "docs_intro.md");
        assert_eq!(
            page.path,
            dir.path().join("public").join("ai").join("docs_intro.md")
        );
        assert_eq!(std::fs::read_to_string(&page.path).unwrap(), "# Wstęp");
    }

    #[test]
    fn test_write_discovery_files() {
        let dir = TempDir::new().unwrap();
        let writer = create_test_writer(&dir);

        let pages = vec![
            writer.save_page("/", "# Home", true).unwrap(),
            writer.save_page("/docs/intro", "# Intro", false).unwrap(),
        ];
        let files = writer.write_discovery_files(&pages).unwrap();

        assert_eq!(files.manifest_path, dir.path().join("public").join("llms.txt"));
        let manifest = std::fs::read_to_string(&files.manifest_path).unwrap();
        assert!(manifest.starts_with("# AI Agent Map"));
        assert!(manifest.contains("- [/](/ai/index.md)"));
        assert!(manifest.contains("- [/docs/intro](/ai/docs_intro.md)"));

        let snippet = std::fs::read_to_string(&files.robots_snippet_path).unwrap();
        assert_eq!(snippet, files.robots_snippet);
        assert!(snippet.starts_with("User-agent: *"));
        assert!(snippet.contains("Allow: /ai/docs_intro.md"));
    }
}
