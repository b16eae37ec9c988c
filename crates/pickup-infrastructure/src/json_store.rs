//! JSON-file-backed key-value store.
//!
//! Backs the durable storage mirror with a single JSON object file. Writes
//! are atomic: serialize to a temp file, fsync, then rename over the target.
//! The full map is cached in memory so reads never touch the disk after
//! construction.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::Mutex;

use pickup_core::error::{PickupError, Result};
use pickup_core::storage::KeyValueStore;
use tracing::debug;

pub struct JsonFileStore {
    path: PathBuf,
    cache: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens (or initializes) the store at `path`.
    ///
    /// A missing or empty file starts as an empty map. A corrupt file is an
    /// error; the caller decides whether to recreate it.
    pub fn new(path: PathBuf) -> Result<Self> {
        let cache = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            cache: Mutex::new(cache),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.cache
            .lock()
            .map_err(|_| PickupError::storage("storage lock poisoned"))
    }

    /// Writes the map to disk atomically: temp file + fsync + rename.
    fn save(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        let serialized = serde_json::to_string_pretty(map)?;
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(serialized.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        debug!(path = %self.path.display(), entries = map.len(), "storage mirror saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.lock()?;
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.lock()?;
        if map.remove(key).is_some() {
            self.save(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("local_storage.json")).unwrap()
    }

    #[test]
    fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.get("authorization").unwrap(), None);
        store.set("authorization", "tok").unwrap();
        assert_eq!(store.get("authorization").unwrap(), Some("tok".to_string()));

        store.remove("authorization").unwrap();
        assert_eq!(store.get("authorization").unwrap(), None);
        // Removing an absent key is fine.
        store.remove("authorization").unwrap();
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("local_storage.json");

        {
            let store = JsonFileStore::new(path.clone()).unwrap();
            store.set("theme", "dark").unwrap();
            store.set("userId", "u1").unwrap();
        }

        let store = JsonFileStore::new(path).unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(store.get("userId").unwrap(), Some("u1".to_string()));
    }

    #[test]
    fn test_set_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope").join("storage.json")).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
        // First write creates the parent directory.
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("light".to_string()));
    }
}
