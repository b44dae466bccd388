//! 考勤存储操作

use super::MemoryStorage;
use crate::errors::{ErpError, Result};
use crate::models::attendance::{entities::AttendanceRecord, requests::AttendanceQuery};
use crate::utils::new_id;

impl MemoryStorage {
    /// 写入考勤（最新在前）
    pub async fn append_attendance_impl(&self, mut record: AttendanceRecord) -> Result<AttendanceRecord> {
        if let Some(id) = record
            .present_students
            .intersection(&record.absent_students)
            .next()
        {
            return Err(ErpError::validation(format!(
                "Student {id} cannot be both present and absent"
            )));
        }

        record.id = new_id("att");
        self.attendance.write().await.push_front(record.clone());
        Ok(record)
    }

    /// 查询考勤
    pub async fn query_attendance_impl(&self, query: &AttendanceQuery) -> Result<Vec<AttendanceRecord>> {
        let records = self.attendance.read().await;
        Ok(records.iter().filter(|r| query.matches(r)).cloned().collect())
    }
}
