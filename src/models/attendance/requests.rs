use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::AttendanceRecord;
use crate::models::common::{ClassNumber, Selection};

// 点名提交请求
//
// marks: 学生 ID -> 是否出勤
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/attendance.ts")]
pub struct MarkAttendanceRequest {
    pub date: NaiveDate,
    pub class_id: Option<ClassNumber>,
    pub section: Option<String>,
    pub subject_id: Option<String>,
    pub marks: BTreeMap<String, bool>,
}

// 考勤查询，各条件按 AND 组合，All 表示不限
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceQuery {
    pub class_id: Selection<ClassNumber>,
    pub section: Selection<String>,
    pub subject_id: Selection<String>,
    pub student_id: Selection<String>,
}

impl AttendanceQuery {
    pub fn for_class(class_id: ClassNumber, section: impl Into<String>) -> Self {
        Self {
            class_id: Selection::One(class_id),
            section: Selection::One(section.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        self.class_id.matches(&record.class_id)
            && self.section.matches(&record.section)
            && self.subject_id.matches(&record.subject_id)
            && match &self.student_id {
                Selection::All => true,
                Selection::One(id) => record.involves(id),
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AttendanceRecord {
        AttendanceRecord {
            id: "att1".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            class_id: 5,
            section: "A".into(),
            subject_id: "math_pri".into(),
            present_students: ["student1".to_string()].into(),
            absent_students: ["student5".to_string()].into(),
            teacher_id: "teacher1".into(),
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert!(AttendanceQuery::default().matches(&record()));
    }

    #[test]
    fn test_fields_are_and_combined() {
        let mut query = AttendanceQuery::for_class(5, "A");
        assert!(query.matches(&record()));
        query.subject_id = Selection::One("eng_pri".into());
        assert!(!query.matches(&record()));
    }

    #[test]
    fn test_student_filter_covers_absentees() {
        let query = AttendanceQuery {
            student_id: Selection::One("student5".into()),
            ..Default::default()
        };
        assert!(query.matches(&record()));
        let query = AttendanceQuery {
            student_id: Selection::One("student7".into()),
            ..Default::default()
        };
        assert!(!query.matches(&record()));
    }
}
