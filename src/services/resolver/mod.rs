//! 分配解析器
//!
//! 根据主体（角色 + 教师分配 / 学生本人班级）逐级计算可选的
//! 班级 -> 分班 -> 科目 -> 学生名册。所有结果保持目录顺序，
//! "没有可选项" 一律以空 Vec 表示。

pub mod selection;

use std::collections::BTreeSet;

use tracing::{debug, warn};

pub use selection::SelectionState;

use crate::config::{AccessConfig, AppConfig};
use crate::directory::Directory;
use crate::models::{
    auth::Principal,
    classes::entities::ClassLevel,
    common::ClassNumber,
    exams::entities::Exam,
    students::entities::Student,
    subjects::entities::Subject,
};

pub struct AssignmentResolver<'a> {
    directory: &'a Directory,
    strict_section_fallback: bool,
}

impl<'a> AssignmentResolver<'a> {
    pub fn new(directory: &'a Directory, access: &AccessConfig) -> Self {
        Self {
            directory,
            strict_section_fallback: access.strict_section_fallback,
        }
    }

    /// 使用全局配置构造
    pub fn from_config(directory: &'a Directory) -> Self {
        Self::new(directory, &AppConfig::get().access)
    }

    pub fn directory(&self) -> &'a Directory {
        self.directory
    }

    pub fn class_options(&self, principal: &Principal) -> Vec<&'a ClassLevel> {
        let classes = self.directory.classes();
        match principal {
            Principal::Admin { .. } => classes.iter().collect(),
            Principal::Teacher { assignments, .. } => {
                let assigned: BTreeSet<ClassNumber> =
                    assignments.iter().map(|a| a.class_id).collect();
                debug!("Teacher assigned to classes {:?}", assigned);
                classes
                    .iter()
                    .filter(|c| c.number().is_some_and(|n| assigned.contains(&n)))
                    .collect()
            }
            Principal::Student { class, .. } => classes
                .iter()
                .filter(|c| c.number() == Some(*class))
                .collect(),
        }
    }

    pub fn section_options(&self, principal: &Principal, class: ClassNumber) -> Vec<String> {
        let Some(level) = self.directory.class_by_number(class) else {
            return Vec::new();
        };

        match principal {
            Principal::Admin { .. } => level.section_names(),
            Principal::Teacher {
                user_id,
                assignments,
            } => {
                let assigned: BTreeSet<&str> = assignments
                    .iter()
                    .filter(|a| a.class_id == class)
                    .map(|a| a.section.as_str())
                    .collect();

                if assigned.is_empty() {
                    if self.strict_section_fallback {
                        debug!("Teacher {} has no assignment in class {}", user_id, class);
                        return Vec::new();
                    }
                    warn!(
                        "Teacher {} has no assignment in class {}, falling back to all sections",
                        user_id, class
                    );
                    return level.section_names();
                }

                level
                    .sections
                    .iter()
                    .filter(|s| assigned.contains(s.name.as_str()))
                    .map(|s| s.name.clone())
                    .collect()
            }
            Principal::Student {
                class: own_class,
                section,
                ..
            } => {
                if *own_class == class && level.has_section(section) {
                    vec![section.clone()]
                } else {
                    Vec::new()
                }
            }
        }
    }

    pub fn subject_options(
        &self,
        principal: &Principal,
        class: ClassNumber,
        section: &str,
    ) -> Vec<&'a Subject> {
        let applicable = self
            .directory
            .subjects()
            .iter()
            .filter(move |s| s.applies_to(class));

        match principal {
            Principal::Teacher { assignments, .. } => {
                let assigned: BTreeSet<&str> = assignments
                    .iter()
                    .filter(|a| a.class_id == class && a.section == section)
                    .map(|a| a.subject_id.as_str())
                    .collect();
                let subjects: Vec<&Subject> = applicable
                    .filter(|s| assigned.contains(s.id.as_str()))
                    .collect();
                if subjects.len() < assigned.len() {
                    debug!(
                        "Dropped {} assigned subject(s) not taught in class {}",
                        assigned.len() - subjects.len(),
                        class
                    );
                }
                subjects
            }
            Principal::Admin { .. } | Principal::Student { .. } => applicable.collect(),
        }
    }

    pub fn roster(&self, class: ClassNumber, section: &str) -> Vec<&'a Student> {
        self.directory.roster(class, section)
    }

    pub fn exam_options(&self, class: ClassNumber) -> Vec<&'a Exam> {
        self.directory
            .exams()
            .iter()
            .filter(|e| e.applies_to(class))
            .collect()
    }
}
