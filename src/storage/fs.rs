//! File-system storage backend

use crate::config::Config;
use crate::storage::traits::{Storage, StorageError, StorageResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the cache file inside the cache directory
const CACHE_FILE_NAME: &str = "cache.json";

/// Storage backed by plain files
///
/// Directories are created on demand, so a fresh checkout needs no setup.
#[derive(Debug, Clone)]
pub struct FsStorage {
    cache_file: PathBuf,
    output_dir: PathBuf,
    site_root: PathBuf,
}

impl FsStorage {
    /// Creates a backend from explicit locations
    ///
    /// # Arguments
    ///
    /// * `cache_dir` - Directory holding `cache.json`
    /// * `output_dir` - Directory receiving per-page files
    /// * `site_root` - Directory receiving site-wide files such as `llms.txt`
    pub fn new(
        cache_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        site_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cache_file: cache_dir.into().join(CACHE_FILE_NAME),
            output_dir: output_dir.into(),
            site_root: site_root.into(),
        }
    }

    /// Creates a backend from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.cache.dir,
            &config.output.dir,
            config.output.site_root(),
        )
    }
}

impl Storage for FsStorage {
    fn read_cache(&self) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(&self.cache_file) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                path: self.cache_file.display().to_string(),
                source: e,
            }),
        }
    }

    fn write_cache(&self, contents: &str) -> StorageResult<()> {
        write_file(&self.cache_file, contents)
    }

    fn write_output(&self, file_name: &str, contents: &str) -> StorageResult<PathBuf> {
        let path = self.output_dir.join(checked_file_name(file_name)?);
        write_file(&path, contents)?;
        Ok(path)
    }

    fn write_site_file(&self, file_name: &str, contents: &str) -> StorageResult<PathBuf> {
        let path = self.site_root.join(checked_file_name(file_name)?);
        write_file(&path, contents)?;
        Ok(path)
    }
}

/// Rejects names that would escape the target directory
fn checked_file_name(file_name: &str) -> StorageResult<&str> {
    if file_name.is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains('/')
        || file_name.contains('\\')
    {
        return Err(StorageError::InvalidFileName(file_name.to_string()));
    }
    Ok(file_name)
}

/// Writes `contents` to `path`, creating parent directories first
fn write_file(path: &Path, contents: &str) -> StorageResult<()> {
    let to_error = |source: std::io::Error| StorageError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(to_error)?;
        }
    }

    std::fs::write(path, contents).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage(dir: &TempDir) -> FsStorage {
        FsStorage::new(
            dir.path().join("cache"),
            dir.path().join("public").join("ai"),
            dir.path().join("public"),
        )
    }

    #[test]
    fn test_read_missing_cache() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);
        assert!(storage.read_cache().unwrap().is_none());
    }

    #[test]
    fn test_cache_roundtrip_creates_directories() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);

        storage.write_cache("{}").unwrap();

        assert!(dir.path().join("cache").join(CACHE_FILE_NAME).exists());
        assert_eq!(storage.read_cache().unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_write_output() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);

        let path = storage.write_output("index.md", "# Hi").unwrap();

        assert_eq!(path, dir.path().join("public").join("ai").join("index.md"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Hi");
    }

    #[test]
    fn test_write_site_file() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);

        let path = storage.write_site_file("llms.txt", "# Map").unwrap();

        assert_eq!(path, dir.path().join("public").join("llms.txt"));
    }

    #[test]
    fn test_rejects_path_components() {
        let dir = TempDir::new().unwrap();
        let storage = create_test_storage(&dir);

        assert!(matches!(
            storage.write_output("../escape.md", "x"),
            Err(StorageError::InvalidFileName(_))
        ));
        assert!(matches!(
            storage.write_site_file("", "x"),
            Err(StorageError::InvalidFileName(_))
        ));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        // A regular file where the output directory should be
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "not a dir").unwrap();
        let storage = FsStorage::new(dir.path().join("cache"), &blocker, dir.path());

        assert!(matches!(
            storage.write_output("index.md", "x"),
            Err(StorageError::Write { .. })
        ));
    }
}
