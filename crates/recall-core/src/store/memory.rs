//! In-memory [`Slot`] implementation for testing and WASM targets.
//!
//! Uses a `HashMap` behind `std::sync::RwLock` for thread safety.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use super::Slot;

/// In-memory slot store for testing and WASM environments.
pub struct InMemorySlot {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Store with `key` pre-populated, e.g. to simulate previously
    /// persisted (or corrupt) state.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl Default for InMemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Slot for InMemorySlot {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
