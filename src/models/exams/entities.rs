use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::ClassNumber;

// 考试类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../ui/src/types/generated/exam.ts")]
pub enum ExamType {
    UnitTest,
    Quarterly,
    HalfYearly,
    Final,
}

// 考试
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/exam.ts")]
pub struct Exam {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub exam_type: ExamType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_marks: u32,
    pub classes_applicable: BTreeSet<ClassNumber>,
}

impl Exam {
    pub fn applies_to(&self, class: ClassNumber) -> bool {
        self.classes_applicable.contains(&class)
    }

    /// 分数是否在 0..=max_marks 之内
    pub fn accepts_marks(&self, marks: i32) -> bool {
        marks >= 0 && (marks as u32) <= self.max_marks
    }
}
