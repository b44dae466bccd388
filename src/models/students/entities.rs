use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::{ClassNumber, Selection};

// 学生实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/student.ts")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub class: ClassNumber,
    pub section: String,
    pub roll_number: String,
    pub registration_number: String,
    pub parent_name: String,
    pub parent_contact: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub avatar: Option<String>,
}

impl Student {
    pub fn belongs_to(&self, class: ClassNumber, section: &str) -> bool {
        self.class == class && self.section == section
    }
}

// 学生列表筛选（学生管理页）
#[derive(Debug, Clone, Default)]
pub struct StudentSearch {
    pub term: String,
    pub class: Selection<ClassNumber>,
    pub section: Selection<String>,
}
