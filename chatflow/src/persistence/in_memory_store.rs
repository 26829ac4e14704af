use dashmap::DashMap;

use super::store::{KeyValueStore, StoreError};

/// In-memory store for tests and throwaway sessions. Data is lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: DashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.get(key).map(|v| v.value().clone()))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.data.remove(key);
        Ok(())
    }
}
