//! In-memory storage implementation
//!
//! Used for tests and for sessions that don't need drafts to survive
//! a restart.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;

use super::LocalStore;

/// In-memory implementation of LocalStore
///
/// A HashMap protected by an RwLock for thread-safe access.
pub struct InMemoryLocalStore {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryLocalStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryLocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStore for InMemoryLocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().unwrap();
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write().unwrap();
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().unwrap();
        items.remove(key);
        Ok(())
    }
}
