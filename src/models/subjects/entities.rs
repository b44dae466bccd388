use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::ClassNumber;

// 科目，可适用于多个年级
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub code: String,
    pub classes_applicable: BTreeSet<ClassNumber>,
}

impl Subject {
    pub fn new(id: &str, name: &str, code: &str, classes: impl IntoIterator<Item = ClassNumber>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            classes_applicable: classes.into_iter().collect(),
        }
    }

    pub fn applies_to(&self, class: ClassNumber) -> bool {
        self.classes_applicable.contains(&class)
    }
}
