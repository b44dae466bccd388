use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::{ClassNumber, Selection};

// 校园活动类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../ui/src/types/generated/event.ts")]
pub enum EventType {
    Holiday,
    Exam,
    Sports,
    Cultural,
    Meeting,
    Activity,
}

// 校园活动
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/event.ts")]
pub struct SchoolEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// 为空表示面向全校
    pub for_classes: Option<BTreeSet<ClassNumber>>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl SchoolEvent {
    pub fn applies_to(&self, class: ClassNumber) -> bool {
        self.for_classes
            .as_ref()
            .is_none_or(|classes| classes.contains(&class))
    }

    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start_date_time.date() == date
    }
}

// 活动筛选
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub event_type: Selection<EventType>,
    pub on_date: Option<NaiveDate>,
}
