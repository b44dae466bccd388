use serde::Deserialize;
use ts_rs::TS;

use super::entities::Assignment;

// 新增/编辑教师请求（编辑时整体替换）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/teacher.ts")]
pub struct TeacherRequest {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub qualification: String,
    pub subjects: Vec<String>,
    pub class_assignments: Vec<Assignment>,
}
