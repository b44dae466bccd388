use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::ClassNumber;

/// 教师分配：对某个 (班级, 分班, 科目) 三元组的读写权限
///
/// 三个字段必须全部精确匹配才算授权，不存在通配或层级关系。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/teacher.ts")]
pub struct Assignment {
    pub class_id: ClassNumber,
    pub section: String,
    pub subject_id: String,
}

impl Assignment {
    pub fn new(class_id: ClassNumber, section: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            class_id,
            section: section.into(),
            subject_id: subject_id.into(),
        }
    }

    pub fn matches(&self, class_id: ClassNumber, section: &str, subject_id: &str) -> bool {
        self.class_id == class_id && self.section == section && self.subject_id == subject_id
    }
}

// 教师实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    /// 任教科目 ID
    pub subjects: Vec<String>,
    /// 分配列表
    pub classes: Vec<Assignment>,
    pub contact_number: String,
    pub qualification: String,
    pub joining_date: NaiveDate,
    pub avatar: Option<String>,
}
