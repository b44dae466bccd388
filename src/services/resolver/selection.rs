//! 级联下拉框的选择状态
//!
//! 每一级选项重新计算后：只有一个选项则自动选中；没有选项则清空
//! 该级及其所有下游；否则仅在当前选择仍有效时保留。

use serde::Serialize;
use tracing::debug;

use super::AssignmentResolver;
use crate::errors::{ErpError, Result};
use crate::models::{auth::Principal, common::ClassNumber};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub class_id: Option<ClassNumber>,
    pub section: Option<String>,
    pub subject_id: Option<String>,
    pub class_options: Vec<ClassNumber>,
    pub section_options: Vec<String>,
    pub subject_options: Vec<String>,
}

/// 自动选择规则
fn settle<T: Clone + PartialEq>(current: Option<T>, options: &[T]) -> Option<T> {
    match options {
        [only] => Some(only.clone()),
        _ => current.filter(|value| options.contains(value)),
    }
}

impl SelectionState {
    pub fn new(resolver: &AssignmentResolver<'_>, principal: &Principal) -> Self {
        let mut state = Self::default();
        state.refresh(resolver, principal);
        state
    }

    /// 目录或会话变化后重新计算全部层级
    pub fn refresh(&mut self, resolver: &AssignmentResolver<'_>, principal: &Principal) {
        self.class_options = resolver
            .class_options(principal)
            .iter()
            .filter_map(|c| c.number())
            .collect();
        self.class_id = settle(self.class_id, &self.class_options);
        self.cascade_sections(resolver, principal);
    }

    pub fn select_class(
        &mut self,
        resolver: &AssignmentResolver<'_>,
        principal: &Principal,
        class_id: ClassNumber,
    ) -> Result<()> {
        if !self.class_options.contains(&class_id) {
            return Err(ErpError::validation(format!(
                "Class {class_id} is not available for selection"
            )));
        }
        if self.class_id != Some(class_id) {
            self.class_id = Some(class_id);
            self.section = None;
            self.subject_id = None;
        }
        self.cascade_sections(resolver, principal);
        Ok(())
    }

    pub fn select_section(
        &mut self,
        resolver: &AssignmentResolver<'_>,
        principal: &Principal,
        section: &str,
    ) -> Result<()> {
        if !self.section_options.iter().any(|s| s == section) {
            return Err(ErpError::validation(format!(
                "Section {section} is not available for selection"
            )));
        }
        if self.section.as_deref() != Some(section) {
            self.section = Some(section.to_string());
            self.subject_id = None;
        }
        self.cascade_subjects(resolver, principal);
        Ok(())
    }

    pub fn select_subject(&mut self, subject_id: &str) -> Result<()> {
        if !self.subject_options.iter().any(|s| s == subject_id) {
            return Err(ErpError::validation(format!(
                "Subject {subject_id} is not available for selection"
            )));
        }
        self.subject_id = Some(subject_id.to_string());
        Ok(())
    }

    /// 三级均已选定时返回 (班级, 分班, 科目)
    pub fn triple(&self) -> Option<(ClassNumber, &str, &str)> {
        Some((
            self.class_id?,
            self.section.as_deref()?,
            self.subject_id.as_deref()?,
        ))
    }

    fn cascade_sections(&mut self, resolver: &AssignmentResolver<'_>, principal: &Principal) {
        match self.class_id {
            Some(class_id) => {
                self.section_options = resolver.section_options(principal, class_id);
                self.section = settle(self.section.take(), &self.section_options);
            }
            None => {
                self.section_options.clear();
                self.section = None;
            }
        }
        self.cascade_subjects(resolver, principal);
    }

    fn cascade_subjects(&mut self, resolver: &AssignmentResolver<'_>, principal: &Principal) {
        match (self.class_id, self.section.as_deref()) {
            (Some(class_id), Some(section)) => {
                self.subject_options = resolver
                    .subject_options(principal, class_id, section)
                    .iter()
                    .map(|s| s.id.clone())
                    .collect();
                self.subject_id = settle(self.subject_id.take(), &self.subject_options);
            }
            _ => {
                self.subject_options.clear();
                self.subject_id = None;
            }
        }
        debug!(
            "Selection settled at class {:?}, section {:?}, subject {:?}",
            self.class_id, self.section, self.subject_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessConfig;
    use crate::directory::Directory;
    use crate::models::teachers::entities::Assignment;

    fn teacher(assignments: Vec<Assignment>) -> Principal {
        Principal::Teacher {
            user_id: "teacher9".into(),
            assignments,
        }
    }

    fn lenient() -> AccessConfig {
        AccessConfig {
            strict_section_fallback: false,
        }
    }

    #[test]
    fn test_single_assignment_auto_selects_everything() {
        let dir = Directory::seeded();
        let resolver = AssignmentResolver::new(&dir, &lenient());
        let state = SelectionState::new(
            &resolver,
            &teacher(vec![Assignment::new(5, "A", "math_pri")]),
        );
        assert_eq!(state.triple(), Some((5, "A", "math_pri")));
    }

    #[test]
    fn test_single_section_is_selected_without_input() {
        let dir = Directory::seeded();
        let resolver = AssignmentResolver::new(&dir, &lenient());
        let principal = teacher(vec![
            Assignment::new(6, "B", "math_mid"),
            Assignment::new(6, "B", "sci_mid"),
            Assignment::new(7, "A", "math_mid"),
        ]);
        let mut state = SelectionState::new(&resolver, &principal);
        assert_eq!(state.class_id, None);
        assert_eq!(state.class_options, vec![6, 7]);

        state.select_class(&resolver, &principal, 6).unwrap();
        assert_eq!(state.section_options, vec!["B"]);
        assert_eq!(state.section.as_deref(), Some("B"));
        assert_eq!(state.subject_options, vec!["math_mid", "sci_mid"]);
        assert_eq!(state.subject_id, None);

        state.select_subject("sci_mid").unwrap();
        assert_eq!(state.triple(), Some((6, "B", "sci_mid")));
    }

    #[test]
    fn test_changing_class_resets_downstream() {
        let dir = Directory::seeded();
        let resolver = AssignmentResolver::new(&dir, &lenient());
        let principal = Principal::Admin {
            user_id: "admin1".into(),
        };
        let mut state = SelectionState::new(&resolver, &principal);
        state.select_class(&resolver, &principal, 5).unwrap();
        state.select_section(&resolver, &principal, "B").unwrap();
        state.select_subject("math_pri").unwrap();

        state.select_class(&resolver, &principal, 9).unwrap();
        assert_eq!(state.section, None);
        assert_eq!(state.subject_id, None);
        assert!(state.subject_options.is_empty());
    }

    #[test]
    fn test_empty_options_clear_downstream() {
        let dir = Directory::seeded();
        let resolver = AssignmentResolver::new(&dir, &lenient());
        let meena = teacher(dir.teacher("teacher3").unwrap().classes.clone());
        let mut state = SelectionState::new(&resolver, &meena);
        state.select_class(&resolver, &meena, 9).unwrap();
        assert_eq!(state.section.as_deref(), Some("B"));
        assert!(state.subject_options.is_empty());
        assert_eq!(state.subject_id, None);
        assert_eq!(state.triple(), None);
    }

    #[test]
    fn test_rejects_values_outside_options() {
        let dir = Directory::seeded();
        let resolver = AssignmentResolver::new(&dir, &lenient());
        let principal = teacher(vec![Assignment::new(5, "A", "math_pri")]);
        let mut state = SelectionState::new(&resolver, &principal);

        assert!(state.select_class(&resolver, &principal, 6).unwrap_err().is_validation());
        assert!(state.select_section(&resolver, &principal, "B").is_err());
        assert!(state.select_subject("eng_pri").is_err());
        assert_eq!(state.triple(), Some((5, "A", "math_pri")));
    }
}
