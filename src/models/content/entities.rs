use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::ClassNumber;

/// 面向整个年级的内容使用的分班名
pub const ALL_SECTIONS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/src/types/generated/content.ts")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// 教案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/content.ts")]
pub struct LessonPlan {
    pub id: String,
    pub title: String,
    pub description: String,
    pub class_id: ClassNumber,
    pub section: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub date_created: NaiveDate,
    pub date_range: DateRange,
    pub content: String,
    pub attachments: Vec<String>,
}

// 录播课
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/content.ts")]
pub struct RecordedClass {
    pub id: String,
    pub title: String,
    pub description: String,
    pub class_id: ClassNumber,
    pub section: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub date_recorded: NaiveDate,
    pub duration_minutes: u32,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// 内容是否对某个学生所在分班可见
pub fn visible_to_section(content_section: &str, student_section: &str) -> bool {
    content_section == student_section || content_section == ALL_SECTIONS
}
