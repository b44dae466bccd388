use std::collections::BTreeSet;

use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{ErpError, Result};
use crate::models::common::ClassNumber;
use crate::utils::validate::parse_class_numbers;

// 新增/编辑科目请求
//
// classes_applicable 为逗号分隔的年级编号，例如 "6,7,8"
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/subject.ts")]
pub struct SubjectRequest {
    pub name: String,
    pub code: String,
    pub classes_applicable: String,
}

/// 校验后的科目字段
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubject {
    pub name: String,
    pub code: String,
    pub classes_applicable: BTreeSet<ClassNumber>,
}

impl SubjectRequest {
    pub fn new(name: &str, code: &str, classes_applicable: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            classes_applicable: classes_applicable.to_string(),
        }
    }

    pub fn parse(&self) -> Result<ValidSubject> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ErpError::validation("Subject name is required"));
        }
        let code = self.code.trim();
        if code.is_empty() {
            return Err(ErpError::validation("Subject code is required"));
        }
        let classes = parse_class_numbers(&self.classes_applicable).map_err(ErpError::validation)?;

        Ok(ValidSubject {
            name: name.to_string(),
            code: code.to_string(),
            classes_applicable: classes,
        })
    }
}
