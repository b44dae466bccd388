//! 会话快照的键值存储
//!
//! 登录后的用户资料与令牌以 JSON 字符串保存在两个固定键下，
//! 登出时一并清除。

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::config::AppConfig;
use crate::errors::{ErpError, Result};

pub use memory::MemoryKeyValueStore;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreResult<T> {
    Found(T),
    NotFound,
}

impl<T> StoreResult<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            StoreResult::Found(value) => Some(value),
            StoreResult::NotFound => None,
        }
    }
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_raw(&self, key: &str) -> StoreResult<String>;
    async fn insert_raw(&self, key: String, value: String);
    async fn remove(&self, key: &str);
}

/// JSON 读写辅助
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>> {
    match store.get_raw(key).await {
        StoreResult::Found(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        StoreResult::NotFound => Ok(None),
    }
}

pub async fn insert_json<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.insert_raw(key.to_string(), raw).await;
    Ok(())
}

/// 按配置创建会话存储
pub fn create_session_store() -> Result<Arc<dyn KeyValueStore>> {
    let backend = &AppConfig::get().session.backend;
    match backend.as_str() {
        "memory" => Ok(Arc::new(MemoryKeyValueStore::new())),
        other if other.is_empty() => Err(ErpError::session_store(
            "Session backend must not be empty",
        )),
        other => {
            warn!("Session backend '{}' is not available, falling back to memory", other);
            Ok(Arc::new(MemoryKeyValueStore::new()))
        }
    }
}
