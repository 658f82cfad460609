//! # File-backed Key-Value Store
//!
//! Native stand-in for browser `localStorage`. Each key lives in its own
//! JSON file at the root of the data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── tailor_config.yaml
//! ├── tailor_designs.json    ← value of key `tailor_designs`
//! └── tailor_bookings.json   ← value of key `tailor_bookings`
//! ```
//!
//! Writes go to a temp file first and are renamed into place, so a crash
//! never leaves a half-written collection behind.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStore;

/// FileStore maps keys to `{key}.json` files under a base directory
#[derive(Debug, Clone)]
pub struct FileStore {
    base_directory: PathBuf,
}

impl FileStore {
    /// Create a new file store, creating the base directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path backing a key
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(anyhow!("Invalid storage key '{}'", key));
        }
        Ok(self.base_directory.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read {} bytes from {:?}", content.len(), path);
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_base_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested = temp_dir.path().join("a").join("b");
        let store = FileStore::new(&nested).expect("Failed to create store");
        assert!(nested.exists());
        assert_eq!(store.base_directory(), nested.as_path());
    }

    #[test]
    fn test_values_persist_across_instances() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp_dir.path()).unwrap();
        store.set("tailor_designs", "[]").unwrap();

        let reopened = FileStore::new(temp_dir.path()).unwrap();
        assert_eq!(reopened.get("tailor_designs").unwrap(), Some("[]".to_string()));
        assert!(temp_dir.path().join("tailor_designs.json").exists());
        assert!(!temp_dir.path().join("tailor_designs.json.tmp").exists());
    }

    #[test]
    fn test_missing_key_reads_none_and_removes_cleanly() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp_dir.path()).unwrap();
        assert_eq!(store.get("tailor_bookings").unwrap(), None);
        store.remove("tailor_bookings").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp_dir.path()).unwrap();
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }
}
