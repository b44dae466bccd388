use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::ClassNumber;

// 分班
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/src/types/generated/class.ts")]
pub struct Section {
    pub id: String,
    pub name: String,
}

// 班级（年级），name 为数字字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/src/types/generated/class.ts")]
pub struct ClassLevel {
    pub id: String,
    pub name: String,
    pub sections: Vec<Section>,
}

impl ClassLevel {
    /// 由班级编号和分班名生成标准班级
    pub fn standard(number: ClassNumber, section_names: &[&str]) -> Self {
        Self {
            id: format!("class{number}"),
            name: number.to_string(),
            sections: section_names
                .iter()
                .map(|s| Section {
                    id: format!("class{number}{s}"),
                    name: (*s).to_string(),
                })
                .collect(),
        }
    }

    /// 班级编号；name 无法解析为数字时返回 None
    pub fn number(&self) -> Option<ClassNumber> {
        self.name.trim().parse().ok()
    }

    pub fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name.clone()).collect()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name == name)
    }
}
