use super::backend::StorageBackend;
use crate::error::{QuotelyError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

const STORAGE_FILENAME: &str = "storage.json";

/// File-backed storage: one JSON object mapping keys to string values.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(QuotelyError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(QuotelyError::Io)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                // Corrupt data reads as empty; the next write replaces it.
                warn!(path = %path.display(), error = %e, "storage file is corrupt, treating as empty");
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(values).map_err(QuotelyError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".storage-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(QuotelyError::Io)?;
        fs::rename(&tmp_file, self.storage_path()).map_err(QuotelyError::Io)?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.load()?;
        Ok(values.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        debug!(key, "writing storage key");
        self.save(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.load()?;
        if values.remove(key).is_none() {
            return Ok(());
        }
        debug!(key, "removing storage key");
        self.save(&values)
    }
}
