//! In-memory key-value store for tests.

use std::collections::HashMap;

use tracing::instrument;

use super::{KeyValueStore, StoreError};

/// Map-backed store that can be told to fail like an unavailable backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reads_fail: bool,
    writes_fail: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one raw entry already present.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    /// Makes every `get` fail.
    #[instrument(skip(self))]
    pub fn set_reads_fail(&mut self, fail: bool) {
        self.reads_fail = fail;
    }

    /// Makes every `set` and `remove` fail, like a full or read-only backend.
    #[instrument(skip(self))]
    pub fn set_writes_fail(&mut self, fail: bool) {
        self.writes_fail = fail;
    }

    /// Raw stored text for a key, bypassing failure simulation.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.reads_fail {
            return Err(StoreError::new("Storage unavailable"));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.writes_fail {
            return Err(StoreError::new("Storage quota exceeded"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.writes_fail {
            return Err(StoreError::new("Storage unavailable"));
        }
        self.entries.remove(key);
        Ok(())
    }
}
