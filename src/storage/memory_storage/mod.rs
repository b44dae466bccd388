//! 内存存储实现
//!
//! 进程内的模拟"数据库"，启动时装载示例考勤与成绩。

mod attendance;
mod results;

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::register::{self, BoxedStorageFuture};
use super::{AttendanceRepository, MEMORY_BACKEND, ResultRepository, Storage};
use crate::directory::seed;
use crate::errors::Result;
use crate::models::{
    attendance::{entities::AttendanceRecord, requests::AttendanceQuery},
    exams::entities::Exam,
    results::{entities::StudentResult, requests::ResultQuery},
};

#[derive(Default)]
pub struct MemoryStorage {
    pub(crate) attendance: RwLock<VecDeque<AttendanceRecord>>,
    pub(crate) results: RwLock<Vec<StudentResult>>,
}

impl MemoryStorage {
    /// 空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 装载示例数据，考勤日期为今天
    pub fn seeded() -> Self {
        let today = chrono::Local::now().date_naive();
        let attendance: VecDeque<AttendanceRecord> = seed::attendance_records(today).into();
        let results = seed::student_results();
        debug!(
            "Memory storage seeded with {} attendance records and {} results",
            attendance.len(),
            results.len()
        );
        Self {
            attendance: RwLock::new(attendance),
            results: RwLock::new(results),
        }
    }
}

pub(super) fn register() {
    register::register_storage_plugin(
        MEMORY_BACKEND,
        Arc::new(|| -> BoxedStorageFuture {
            Box::pin(async { Ok(Box::new(MemoryStorage::seeded()) as Box<dyn Storage>) })
        }),
    );
}

#[async_trait]
impl AttendanceRepository for MemoryStorage {
    async fn append_attendance(&self, record: AttendanceRecord) -> Result<AttendanceRecord> {
        self.append_attendance_impl(record).await
    }

    async fn query_attendance(&self, query: &AttendanceQuery) -> Result<Vec<AttendanceRecord>> {
        self.query_attendance_impl(query).await
    }
}

#[async_trait]
impl ResultRepository for MemoryStorage {
    async fn append_result(&self, result: StudentResult, exam: &Exam) -> Result<StudentResult> {
        self.append_result_impl(result, exam).await
    }

    async fn query_results(&self, query: &ResultQuery) -> Result<Vec<StudentResult>> {
        self.query_results_impl(query).await
    }
}
