//! JSON-file-backed store (local-storage analogue).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::kv::{ChangeNotifier, KeyValueStore, StoreChange, StoreError, Subscription};

/// Store persisting all keys as a single JSON object file.
///
/// The whole map is read once on open and rewritten on every mutation,
/// mirroring how the browser original used local storage. Suited to the small
/// collections this dashboard holds, not to high write rates.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
    notifier: ChangeNotifier,
}

impl JsonFileStore {
    /// Open (or create) the store at `path`.
    ///
    /// A missing file starts empty; a malformed file is an error so existing
    /// data is never silently clobbered.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
            notifier: ChangeNotifier::default(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        {
            let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
            entries.insert(key.to_string(), value.to_string());
            self.flush(&entries)?;
        }
        self.notifier.publish(key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let removed = {
            let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
            let removed = entries.remove(key).is_some();
            if removed {
                self.flush(&entries)?;
            }
            removed
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
