//! 记录存储层
//!
//! 考勤与成绩以仓储 trait 暴露，具体后端通过插件注册表按名称创建，
//! 服务层只依赖 `Arc<dyn Storage>`。

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::{ErpError, Result};
use crate::models::{
    attendance::{entities::AttendanceRecord, requests::AttendanceQuery},
    exams::entities::Exam,
    results::{entities::StudentResult, requests::ResultQuery},
};

pub mod memory_storage;
pub mod register;

/// 默认（兜底）后端名称
pub const MEMORY_BACKEND: &str = "memory";

#[async_trait::async_trait]
pub trait AttendanceRepository: Send + Sync {
    // 写入一条考勤，分配新 ID 并置于最前
    async fn append_attendance(&self, record: AttendanceRecord) -> Result<AttendanceRecord>;
    // 按条件查询考勤，最新在前
    async fn query_attendance(&self, query: &AttendanceQuery) -> Result<Vec<AttendanceRecord>>;
}

#[async_trait::async_trait]
pub trait ResultRepository: Send + Sync {
    // 写入一条成绩；分数超出 0..=满分 时拒绝且不写入
    async fn append_result(&self, result: StudentResult, exam: &Exam) -> Result<StudentResult>;
    // 按条件查询成绩
    async fn query_results(&self, query: &ResultQuery) -> Result<Vec<StudentResult>>;
}

/// 全部仓储的组合
pub trait Storage: AttendanceRepository + ResultRepository {}

impl<T: AttendanceRepository + ResultRepository> Storage for T {}

/// 注册内置后端
pub fn register_builtin_plugins() {
    memory_storage::register();
}

/// 按配置创建存储后端；配置的后端不可用时回退到内存后端
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let backend = &AppConfig::get().storage.backend;
    create_storage_named(backend).await
}

pub async fn create_storage_named(backend: &str) -> Result<Arc<dyn Storage>> {
    register_builtin_plugins();
    if cfg!(debug_assertions) {
        register::debug_storage_registry();
    }

    debug!("Attempting to create {} storage backend", backend);

    match register::get_storage_plugin(backend) {
        Some(constructor) => match constructor().await {
            Ok(storage) => return Ok(Arc::from(storage)),
            Err(e) => warn!("Failed to create {} storage: {}", backend, e),
        },
        None => warn!("Storage backend '{}' not found in registry", backend),
    }

    if backend != MEMORY_BACKEND {
        warn!("Falling back to memory storage");
        if let Some(fallback) = register::get_storage_plugin(MEMORY_BACKEND) {
            let storage = fallback().await?;
            return Ok(Arc::from(storage));
        }
    }

    Err(ErpError::storage_plugin_not_found(format!(
        "No storage backend available (tried: {backend})"
    )))
}
