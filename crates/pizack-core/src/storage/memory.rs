//! In-process storage backend.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use super::Storage;
use crate::error::{PizackError, Result};

/// Storage held in memory.
///
/// Clones share the same underlying map, so a test can hand one clone to a
/// store and inspect or reuse the data through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> PizackError {
        PizackError::Configuration {
            message: "Memory storage lock poisoned".to_string(),
        }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().map_err(|_| Self::poisoned())?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| Self::poisoned())?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_items() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set_item("k", "v1").unwrap();
        assert_eq!(other.get_item("k").unwrap().as_deref(), Some("v1"));

        other.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.get_item("missing").unwrap(), None);
    }
}
