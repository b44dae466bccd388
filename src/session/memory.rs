use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::{KeyValueStore, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    inner: DashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get_raw(&self, key: &str) -> StoreResult<String> {
        match self.inner.get(key) {
            Some(value) => StoreResult::Found(value.clone()),
            None => {
                debug!("Key not found in session store: {}", key);
                StoreResult::NotFound
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String) {
        self.inner.insert(key, value);
    }

    async fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}
