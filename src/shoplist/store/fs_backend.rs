use super::backend::{validate_key, StorageBackend};
use crate::error::{Result, ShoplistError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// File-backed storage: one file per key under `root`.
///
/// ```text
/// <data-dir>/store/
/// ├── list     # JSON array of items
/// └── theme    # "light" or "dark"
/// ```
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`. The file may not exist yet.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShoplistError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).map_err(ShoplistError::Io)?;
        debug!(key, bytes = value.len(), "read key");
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, value).and_then(|_| fs::rename(&tmp_path, &path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShoplistError::Io(e));
        }

        debug!(key, bytes = value.len(), "wrote key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(ShoplistError::Io)?;
            debug!(key, "removed key");
        }
        Ok(())
    }
}
