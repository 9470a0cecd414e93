//! Most-recently-used history persisted through a [`KeyValueStore`].

use crate::ports::kv::KeyValueStore;

/// Storage key used by the command palette.
pub const RECENT_COMMANDS_KEY: &str = "command_palette_recent";
/// Entries kept by default.
pub const MAX_RECENTS: usize = 6;

/// A newest-first list of ids without duplicates.
pub struct RecentHistory<'a> {
    store: &'a dyn KeyValueStore,
    key: String,
    limit: usize,
}

impl<'a> RecentHistory<'a> {
    /// Creates a history stored under `key`, keeping at most `limit` entries.
    #[must_use]
    pub fn new(store: &'a dyn KeyValueStore, key: &str, limit: usize) -> Self {
        Self { store, key: key.to_string(), limit }
    }

    /// The command palette's history.
    #[must_use]
    pub fn commands(store: &'a dyn KeyValueStore) -> Self {
        Self::new(store, RECENT_COMMANDS_KEY, MAX_RECENTS)
    }

    /// Stored entries, newest first.
    ///
    /// Unreadable or corrupt history is logged and treated as empty.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::error!("Failed to read recent history {}: {err}", self.key);
                return Vec::new();
            }
        };
        serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|err| {
            log::error!("Failed to parse recent history {}: {err}", self.key);
            Vec::new()
        })
    }

    /// Moves `id` to the front, trims to the limit, and persists the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be written.
    pub fn record(&self, id: &str) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let mut next = vec![id.to_string()];
        next.extend(self.entries().into_iter().filter(|entry| entry != id));
        next.truncate(self.limit);
        self.store.set(&self.key, &serde_json::to_string(&next)?)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    #[test]
    fn empty_store_has_no_entries() {
        let store = MemoryStore::new();
        assert!(RecentHistory::commands(&store).entries().is_empty());
    }

    #[test]
    fn record_moves_to_front_without_duplicates() {
        let store = MemoryStore::new();
        let history = RecentHistory::commands(&store);
        history.record("about").unwrap();
        history.record("projects").unwrap();
        let entries = history.record("about").unwrap();
        assert_eq!(entries, vec!["about", "projects"]);
        assert_eq!(history.entries(), entries);
    }

    #[test]
    fn record_trims_to_limit() {
        let store = MemoryStore::new();
        let history = RecentHistory::new(&store, "recent", 3);
        for id in ["a", "b", "c", "d", "e"] {
            history.record(id).unwrap();
        }
        assert_eq!(history.entries(), vec!["e", "d", "c"]);
    }

    #[test]
    fn corrupt_history_reads_as_empty_and_is_overwritten() {
        let store = MemoryStore::new();
        store.set(RECENT_COMMANDS_KEY, "{oops").unwrap();
        let history = RecentHistory::commands(&store);
        assert!(history.entries().is_empty());
        assert_eq!(history.record("blog").unwrap(), vec!["blog"]);
    }

    #[test]
    fn persisted_as_json_array() {
        let store = MemoryStore::new();
        RecentHistory::commands(&store).record("resume").unwrap();
        assert_eq!(store.get(RECENT_COMMANDS_KEY).unwrap().as_deref(), Some("[\"resume\"]"));
    }
}
