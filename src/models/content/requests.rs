use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::DateRange;
use crate::models::common::ClassNumber;

// 教案时间段筛选
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../ui/src/types/generated/content.ts")]
pub enum PlanTimeline {
    #[default]
    All,
    Current,
    Upcoming,
    Past,
}

impl PlanTimeline {
    pub fn matches(&self, range: &DateRange, today: NaiveDate) -> bool {
        match self {
            PlanTimeline::All => true,
            PlanTimeline::Current => range.contains(today),
            PlanTimeline::Upcoming => today < range.start,
            PlanTimeline::Past => today > range.end,
        }
    }
}

// 教案列表筛选
#[derive(Debug, Clone, Default)]
pub struct LessonPlanFilter {
    pub search: String,
    pub timeline: PlanTimeline,
    pub today: Option<NaiveDate>,
}

// 新建教案
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/content.ts")]
pub struct CreateLessonPlanRequest {
    pub title: String,
    pub description: String,
    pub class_id: ClassNumber,
    pub section: String,
    pub subject_id: String,
    pub date_range: DateRange,
    pub content: String,
    pub attachments: Vec<String>,
}

// 上传录播课
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/content.ts")]
pub struct CreateRecordedClassRequest {
    pub title: String,
    pub description: String,
    pub class_id: ClassNumber,
    pub section: String,
    pub subject_id: String,
    pub date_recorded: NaiveDate,
    pub duration_minutes: u32,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
}
