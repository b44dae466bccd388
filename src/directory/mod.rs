//! 目录：班级、科目、学生、教师、考试、活动等静态参考数据
//!
//! 读取方只做 ID 查找；悬空引用解析为占位文本而不是报错。
//! 管理员的增删改在 [`admin`] 中，按整元素替换。

pub mod admin;
pub mod seed;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{
    common::{ClassNumber, UNKNOWN_EXAM, UNKNOWN_STUDENT, UNKNOWN_SUBJECT, UNKNOWN_TEACHER},
    classes::entities::ClassLevel,
    content::entities::{LessonPlan, RecordedClass},
    events::entities::SchoolEvent,
    exams::entities::Exam,
    students::entities::{Student, StudentSearch},
    subjects::entities::Subject,
    teachers::entities::Teacher,
    users::entities::{Admin, Credential, UserProfile, UserRole},
};

/// 会话内共享的目录
pub type SharedDirectory = Arc<RwLock<Directory>>;

#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub(crate) classes: Vec<ClassLevel>,
    pub(crate) subjects: Vec<Subject>,
    pub(crate) students: Vec<Student>,
    pub(crate) teachers: Vec<Teacher>,
    pub(crate) admins: Vec<Admin>,
    pub(crate) exams: Vec<Exam>,
    pub(crate) events: Vec<SchoolEvent>,
    pub(crate) lesson_plans: Vec<LessonPlan>,
    pub(crate) recorded_classes: Vec<RecordedClass>,
    pub(crate) credentials: Vec<Credential>,
}

impl Directory {
    /// 装载内置模拟数据
    pub fn seeded() -> Self {
        let admins = seed::admins();
        let teachers = seed::teachers();
        let students = seed::students();
        let credentials = seed::credentials(&admins, &teachers, &students);

        Self {
            classes: seed::classes(),
            subjects: seed::subjects(),
            students,
            teachers,
            admins,
            exams: seed::exams(),
            events: seed::events(),
            lesson_plans: seed::lesson_plans(),
            recorded_classes: seed::recorded_classes(),
            credentials,
        }
    }

    pub fn into_shared(self) -> SharedDirectory {
        Arc::new(RwLock::new(self))
    }

    pub fn classes(&self) -> &[ClassLevel] {
        &self.classes
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn admins(&self) -> &[Admin] {
        &self.admins
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn events(&self) -> &[SchoolEvent] {
        &self.events
    }

    pub fn lesson_plans(&self) -> &[LessonPlan] {
        &self.lesson_plans
    }

    pub fn recorded_classes(&self) -> &[RecordedClass] {
        &self.recorded_classes
    }

    pub fn class_by_id(&self, id: &str) -> Option<&ClassLevel> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn class_by_number(&self, number: ClassNumber) -> Option<&ClassLevel> {
        self.classes.iter().find(|c| c.number() == Some(number))
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    pub fn exam(&self, id: &str) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == id)
    }

    pub fn subject_name(&self, id: &str) -> &str {
        self.subject(id).map_or(UNKNOWN_SUBJECT, |s| s.name.as_str())
    }

    pub fn exam_name(&self, id: &str) -> &str {
        self.exam(id).map_or(UNKNOWN_EXAM, |e| e.name.as_str())
    }

    pub fn student_name(&self, id: &str) -> &str {
        self.student(id).map_or(UNKNOWN_STUDENT, |s| s.name.as_str())
    }

    pub fn teacher_name(&self, id: &str) -> &str {
        self.teacher(id).map_or(UNKNOWN_TEACHER, |t| t.name.as_str())
    }

    /// 考试满分；未知考试返回 0
    pub fn exam_max_marks(&self, id: &str) -> u32 {
        self.exam(id).map_or(0, |e| e.max_marks)
    }

    /// 某班级某分班的学生名册，保持目录顺序
    pub fn roster(&self, class: ClassNumber, section: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.belongs_to(class, section))
            .collect()
    }

    /// 明文凭据比对；不区分"用户不存在"与"密码错误"
    pub fn find_credential(&self, email: &str, password: &str) -> Option<&Credential> {
        self.credentials
            .iter()
            .find(|c| c.email == email && c.password == password)
    }

    /// 按 ID 与角色取完整资料
    pub fn profile(&self, user_id: &str, role: UserRole) -> Option<UserProfile> {
        match role {
            UserRole::Admin => self
                .admins
                .iter()
                .find(|a| a.id == user_id)
                .cloned()
                .map(UserProfile::Admin),
            UserRole::Teacher => self.teacher(user_id).cloned().map(UserProfile::Teacher),
            UserRole::Student => self.student(user_id).cloned().map(UserProfile::Student),
        }
    }

    /// 学生搜索：姓名、注册号、家长姓名模糊匹配，再按班级/分班过滤
    pub fn search_students(&self, search: &StudentSearch) -> Vec<&Student> {
        let term = search.term.trim().to_lowercase();
        self.students
            .iter()
            .filter(|s| {
                term.is_empty()
                    || s.name.to_lowercase().contains(&term)
                    || s.registration_number.to_lowercase().contains(&term)
                    || s.parent_name.to_lowercase().contains(&term)
            })
            .filter(|s| search.class.matches(&s.class) && search.section.matches(&s.section))
            .collect()
    }

    /// 教师搜索：姓名、邮箱或任一任教科目名称
    pub fn search_teachers(&self, term: &str) -> Vec<&Teacher> {
        let term = term.trim().to_lowercase();
        self.teachers
            .iter()
            .filter(|t| {
                term.is_empty()
                    || t.name.to_lowercase().contains(&term)
                    || t.email.to_lowercase().contains(&term)
                    || t.subjects
                        .iter()
                        .any(|id| self.subject_name(id).to_lowercase().contains(&term))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::Selection;

    #[test]
    fn test_seeded_directory_shape() {
        let dir = Directory::seeded();
        assert_eq!(dir.classes().len(), 10);
        assert!(dir.classes().iter().all(|c| !c.sections.is_empty()));
        assert_eq!(dir.teachers().len(), 3);
        assert_eq!(dir.students().len(), 7);
        assert_eq!(dir.exam_max_marks("exam1"), 25);
    }

    #[test]
    fn test_dangling_references_use_placeholders() {
        let dir = Directory::seeded();
        assert_eq!(dir.subject_name("math_pri"), "Mathematics");
        assert_eq!(dir.subject_name("astro_sec"), "Unknown Subject");
        assert_eq!(dir.exam_name("exam99"), "Unknown Exam");
        assert_eq!(dir.student_name("student99"), "Unknown Student");
        assert_eq!(dir.exam_max_marks("exam99"), 0);
    }

    #[test]
    fn test_roster_keeps_directory_order() {
        let dir = Directory::seeded();
        let ids: Vec<&str> = dir.roster(5, "A").iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["student1", "student5"]);
        assert!(dir.roster(5, "B").is_empty());
    }

    #[test]
    fn test_credentials_do_not_distinguish_failures() {
        let dir = Directory::seeded();
        assert!(dir.find_credential("anjali@vidyaerp.com", "teacher123").is_some());
        assert!(dir.find_credential("anjali@vidyaerp.com", "wrong").is_none());
        assert!(dir.find_credential("nobody@vidyaerp.com", "teacher123").is_none());
    }

    #[test]
    fn test_profile_lookup_by_role() {
        let dir = Directory::seeded();
        let profile = dir.profile("teacher1", UserRole::Teacher).unwrap();
        assert_eq!(profile.name(), "Anjali Gupta");
        assert!(dir.profile("teacher1", UserRole::Student).is_none());
    }

    #[test]
    fn test_search_students() {
        let dir = Directory::seeded();
        let by_parent = dir.search_students(&StudentSearch {
            term: "harpreet".into(),
            ..Default::default()
        });
        assert_eq!(by_parent.len(), 1);
        assert_eq!(by_parent[0].id, "student2");

        let class_five_a = dir.search_students(&StudentSearch {
            term: String::new(),
            class: Selection::One(5),
            section: Selection::One("A".into()),
        });
        assert_eq!(class_five_a.len(), 2);
    }

    #[test]
    fn test_search_teachers_by_subject_name() {
        let dir = Directory::seeded();
        let found = dir.search_teachers("social");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "teacher2");
    }
}
