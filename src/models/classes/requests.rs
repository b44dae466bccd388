use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{ErpError, Result};
use crate::models::common::ClassNumber;
use crate::utils::validate::{parse_class_number, parse_sections};

// 新增/编辑班级请求
//
// sections 为逗号分隔的分班名，例如 "A,B,C"
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../ui/src/types/generated/class.ts")]
pub struct ClassRequest {
    pub name: String,
    pub sections: String,
}

impl ClassRequest {
    pub fn new(name: impl Into<String>, sections: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: sections.into(),
        }
    }

    /// 校验并解析为 (班级编号, 分班名列表)
    pub fn parse(&self) -> Result<(ClassNumber, Vec<String>)> {
        let number = parse_class_number(&self.name).map_err(ErpError::validation)?;
        let sections = parse_sections(&self.sections).map_err(ErpError::validation)?;
        Ok((number, sections))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_request() {
        let (number, sections) = ClassRequest::new("11", " A, B ,C ").parse().unwrap();
        assert_eq!(number, 11);
        assert_eq!(sections, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_missing_name_is_reported_first() {
        let err = ClassRequest::new("  ", "").parse().unwrap_err();
        assert_eq!(err.message(), "Class name is required");
    }

    #[test]
    fn test_only_commas_is_invalid_format() {
        let err = ClassRequest::new("4", " , ,").parse().unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid sections format. Use comma-separated values (e.g. A,B,C)"
        );
    }
}
