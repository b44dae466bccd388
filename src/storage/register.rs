//! 存储后端注册表
//!
//! 后端按名称登记构造函数，`storage.backend` 配置只需给出名称即可切换；
//! 新后端只要在启动前调用 [`register_storage_plugin`]，服务层无需改动。

use std::{
    collections::BTreeMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::errors::Result;
use crate::storage::Storage;

pub type BoxedStorageFuture = Pin<Box<dyn Future<Output = Result<Box<dyn Storage>>> + Send>>;
pub type StorageConstructor = Arc<dyn Fn() -> BoxedStorageFuture + Send + Sync>;

static BACKENDS: Lazy<RwLock<BTreeMap<String, StorageConstructor>>> =
    Lazy::new(|| RwLock::new(BTreeMap::new()));

/// 登记后端；同名再次登记会替换旧的构造函数
pub fn register_storage_plugin<S: Into<String>>(name: S, constructor: StorageConstructor) {
    // 表中只有构造函数，锁中毒时数据依然完整
    BACKENDS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .insert(name.into(), constructor);
}

pub fn get_storage_plugin(name: &str) -> Option<StorageConstructor> {
    BACKENDS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(name)
        .cloned()
}

/// 已登记的后端名称（按字母序）
pub fn registered_backends() -> Vec<String> {
    BACKENDS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .keys()
        .cloned()
        .collect()
}

pub fn debug_storage_registry() {
    let names = registered_backends();
    if names.is_empty() {
        debug!("No storage backends registered");
    } else {
        debug!("Registered storage backends: {}", names.join(", "));
    }
}
