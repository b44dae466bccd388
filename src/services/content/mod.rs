pub mod lesson_plans;
pub mod recorded_classes;

use crate::directory::SharedDirectory;
use crate::errors::Result;
use crate::models::{
    auth::{Principal, Session},
    common::ClassNumber,
    content::{
        entities::{LessonPlan, RecordedClass, visible_to_section},
        requests::{CreateLessonPlanRequest, CreateRecordedClassRequest, LessonPlanFilter},
    },
};

pub struct ContentService {
    directory: SharedDirectory,
}

/// 内容可见性：教师看自己创建的，学生看本年级且分班相同或面向全年级的，管理员看全部
pub(crate) fn visible_to(
    principal: &Principal,
    teacher_id: &str,
    class_id: ClassNumber,
    section: &str,
) -> bool {
    match principal {
        Principal::Admin { .. } => true,
        Principal::Teacher { user_id, .. } => user_id == teacher_id,
        Principal::Student {
            class,
            section: own_section,
            ..
        } => *class == class_id && visible_to_section(section, own_section),
    }
}

/// 不区分大小写的标题/描述检索；空关键字匹配全部
pub(crate) fn matches_search(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&term))
}

impl ContentService {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    // 教案列表
    pub async fn lesson_plans(
        &self,
        session: &Session,
        filter: LessonPlanFilter,
    ) -> Result<Vec<LessonPlan>> {
        lesson_plans::list_lesson_plans(self, session, filter).await
    }

    // 新建教案
    pub async fn create_lesson_plan(
        &self,
        session: &Session,
        request: CreateLessonPlanRequest,
    ) -> Result<LessonPlan> {
        lesson_plans::create_lesson_plan(self, session, request).await
    }

    // 录播课列表（最新在前）
    pub async fn recorded_classes(
        &self,
        session: &Session,
        search: &str,
    ) -> Result<Vec<RecordedClass>> {
        recorded_classes::list_recorded_classes(self, session, search).await
    }

    // 上传录播课
    pub async fn create_recorded_class(
        &self,
        session: &Session,
        request: CreateRecordedClassRequest,
    ) -> Result<RecordedClass> {
        recorded_classes::create_recorded_class(self, session, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_sees_own_section_or_all() {
        let student = Principal::Student {
            user_id: "student2".into(),
            class: 8,
            section: "B".into(),
        };
        assert!(visible_to(&student, "teacher2", 8, "B"));
        assert!(visible_to(&student, "teacher2", 8, "All"));
        assert!(!visible_to(&student, "teacher3", 8, "A"));
        assert!(!visible_to(&student, "teacher2", 7, "B"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(matches_search("  ", &["anything"]));
        assert!(matches_search("FRACT", &["Introduction to Fractions"]));
        assert!(!matches_search("algebra", &["Introduction to Fractions", "basic"]));
    }
}
