//! In-process key-value store for tests and throwaway sessions.

use super::{KeyValueStore, StoreResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Map-backed store; contents live as long as the value.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
