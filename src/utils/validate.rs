use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::common::ClassNumber;

static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]$").expect("Invalid section regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_section_name(section: &str) -> Result<(), &'static str> {
    if !SECTION_RE.is_match(section) {
        return Err("Section names must be single letters (e.g. A,B,C)");
    }
    Ok(())
}

/// 解析班级名称为正整数编号
pub fn parse_class_number(name: &str) -> Result<ClassNumber, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Class name is required");
    }
    match name.parse::<ClassNumber>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("Class name must be a positive number"),
    }
}

/// 解析逗号分隔的分班列表，保持输入顺序
pub fn parse_sections(input: &str) -> Result<Vec<String>, &'static str> {
    if input.trim().is_empty() {
        return Err("At least one section is required");
    }

    let mut sections: Vec<String> = Vec::new();
    for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        validate_section_name(raw)?;
        if sections.iter().any(|s| s == raw) {
            return Err("Section names must be unique");
        }
        sections.push(raw.to_string());
    }

    if sections.is_empty() {
        return Err("Invalid sections format. Use comma-separated values (e.g. A,B,C)");
    }
    Ok(sections)
}

/// 解析逗号分隔的适用年级列表
pub fn parse_class_numbers(input: &str) -> Result<BTreeSet<ClassNumber>, &'static str> {
    if input.trim().is_empty() {
        return Err("At least one applicable class is required");
    }

    let mut classes = BTreeSet::new();
    for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match raw.parse::<ClassNumber>() {
            Ok(n) if n > 0 => {
                classes.insert(n);
            }
            _ => return Err("Invalid class numbers"),
        }
    }

    if classes.is_empty() {
        return Err("At least one applicable class is required");
    }
    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections_trims_and_keeps_order() {
        assert_eq!(parse_sections("C, A ,B").unwrap(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_parse_sections_errors() {
        assert_eq!(parse_sections("   "), Err("At least one section is required"));
        assert_eq!(
            parse_sections(",,"),
            Err("Invalid sections format. Use comma-separated values (e.g. A,B,C)")
        );
        assert_eq!(
            parse_sections("A,BB"),
            Err("Section names must be single letters (e.g. A,B,C)")
        );
        assert_eq!(parse_sections("A,A"), Err("Section names must be unique"));
    }

    #[test]
    fn test_parse_class_number() {
        assert_eq!(parse_class_number(" 7 "), Ok(7));
        assert_eq!(parse_class_number(""), Err("Class name is required"));
        assert_eq!(parse_class_number("0"), Err("Class name must be a positive number"));
        assert_eq!(parse_class_number("X"), Err("Class name must be a positive number"));
    }

    #[test]
    fn test_parse_class_numbers_dedupes() {
        let set = parse_class_numbers("9,10, 9").unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![9, 10]);
        assert_eq!(parse_class_numbers("9,x"), Err("Invalid class numbers"));
        assert_eq!(
            parse_class_numbers(" , "),
            Err("At least one applicable class is required")
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("anjali@vidyaerp.com").is_ok());
        assert!(validate_email("anjali").is_err());
    }
}
