//! Live key-value store persisted as a JSON object on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::FileSystem;
use crate::ports::kv::KeyValueStore;

/// Stores every key in one JSON object file, rewritten on each `set`.
pub struct JsonFileStore {
    fs: Box<dyn FileSystem>,
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, path: &Path) -> Self {
        Self { fs, path: path.to_path_buf(), lock: Mutex::new(()) }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.fs.exists(&self.path) {
            return Ok(BTreeMap::new());
        }
        let text = self.fs.read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let _guard = self.lock.lock().map_err(|_| "key-value store lock poisoned")?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _guard = self.lock.lock().map_err(|_| "key-value store lock poisoned")?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        let mut text = serde_json::to_string_pretty(&entries)?;
        text.push('\n');
        self.fs.write(&self.path, &text)
    }
}
