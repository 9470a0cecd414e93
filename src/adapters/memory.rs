//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::kv::KeyValueStore;

/// Process-local key-value store; contents vanish on drop.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let entries = self.entries.lock().map_err(|_| "memory store lock poisoned")?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = self.entries.lock().map_err(|_| "memory store lock poisoned")?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
