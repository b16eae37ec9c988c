//! In-memory key-value store.
//!
//! A `KeyValueStore` that keeps everything in a `HashMap`. Used as a test
//! double for the durable storage mirror; nothing survives the process.

use std::collections::HashMap;
use std::sync::Mutex;

use pickup_core::error::{PickupError, Result};
use pickup_core::storage::KeyValueStore;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| PickupError::storage("storage lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        store.set("authorization", "tok").unwrap();
        assert_eq!(store.get("authorization").unwrap(), Some("tok".to_string()));
        store.remove("authorization").unwrap();
        assert_eq!(store.get("authorization").unwrap(), None);
    }
}
