//! In-memory store for tests/dev.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::kv::{ChangeNotifier, KeyValueStore, StoreChange, StoreError, Subscription};

/// HashMap-backed store. No IO, broadcast notifications on mutation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    notifier: ChangeNotifier,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        {
            let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
            entries.insert(key.to_string(), value.to_string());
        }
        self.notifier.publish(key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let removed = {
            let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
            entries.remove(key).is_some()
        };
        if removed {
            self.notifier.publish(key);
        }
        Ok(())
    }

    fn subscribe(&self) -> Subscription<StoreChange> {
        self.notifier.subscribe()
    }
}
