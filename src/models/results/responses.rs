use serde::Serialize;
use ts_rs::TS;

use super::entities::{GradeBand, StudentResult};

// 带显示信息的成绩行
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/result.ts")]
pub struct ResultRow {
    pub result: StudentResult,
    pub student_name: String,
    pub subject_name: String,
    pub exam_name: String,
    pub max_marks: u32,
    pub percentage: f64,
    pub band: GradeBand,
}
