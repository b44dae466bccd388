use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::ClassNumber;

// 考勤记录
//
// presentStudents 与 absentStudents 互不相交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub class_id: ClassNumber,
    pub section: String,
    pub subject_id: String,
    pub present_students: BTreeSet<String>,
    pub absent_students: BTreeSet<String>,
    pub teacher_id: String,
}

impl AttendanceRecord {
    pub fn was_present(&self, student_id: &str) -> bool {
        self.present_students.contains(student_id)
    }

    /// 学生是否出现在本条记录中（出勤或缺勤）
    pub fn involves(&self, student_id: &str) -> bool {
        self.present_students.contains(student_id) || self.absent_students.contains(student_id)
    }
}
