use std::collections::BTreeSet;

use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::{ClassNumber, Selection};

// 录入成绩请求（表单字段均可能未填写）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/result.ts")]
pub struct AddResultRequest {
    pub class_id: Option<ClassNumber>,
    pub section: Option<String>,
    pub subject_id: Option<String>,
    pub exam_id: Option<String>,
    pub student_id: Option<String>,
    pub marks_obtained: Option<i32>,
    pub remarks: Option<String>,
}

// 成绩查看筛选（服务层）
//
// 班级/分班通过学生名册转换为存储层的 roster 约束
#[derive(Debug, Clone, Default)]
pub struct ResultFilter {
    pub class_id: Selection<ClassNumber>,
    pub section: Selection<String>,
    pub exam_id: Selection<String>,
    pub student_id: Selection<String>,
    pub subject_id: Selection<String>,
}

// 成绩查询（存储层），各条件按 AND 组合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultQuery {
    pub student_id: Selection<String>,
    pub exam_id: Selection<String>,
    pub subject_id: Selection<String>,
    /// 限定在这些学生之内；None 表示不限
    pub roster: Option<BTreeSet<String>>,
}

impl ResultQuery {
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self {
            student_id: Selection::One(student_id.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, result: &super::entities::StudentResult) -> bool {
        self.student_id.matches(&result.student_id)
            && self.exam_id.matches(&result.exam_id)
            && self.subject_id.matches(&result.subject_id)
            && self
                .roster
                .as_ref()
                .is_none_or(|ids| ids.contains(&result.student_id))
    }
}
