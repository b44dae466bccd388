use serde::Serialize;
use ts_rs::TS;

use super::entities::AttendanceRecord;

// 学生本人视角的一条考勤
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/attendance.ts")]
pub struct StudentAttendanceEntry {
    pub record: AttendanceRecord,
    pub subject_name: String,
    pub present: bool,
}

// 学生考勤汇总
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/attendance.ts")]
pub struct StudentAttendanceView {
    pub entries: Vec<StudentAttendanceEntry>,
    pub present: u32,
    pub total: u32,
    pub percentage: f64,
}
