pub mod list;
pub mod mark;

use std::sync::Arc;

use crate::directory::SharedDirectory;
use crate::errors::Result;
use crate::models::{
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceQuery, MarkAttendanceRequest},
        responses::StudentAttendanceView,
    },
    auth::Session,
};
use crate::storage::Storage;

pub struct AttendanceService {
    directory: SharedDirectory,
    storage: Arc<dyn Storage>,
}

impl AttendanceService {
    pub fn new(directory: SharedDirectory, storage: Arc<dyn Storage>) -> Self {
        Self { directory, storage }
    }

    // 提交点名
    pub async fn mark(
        &self,
        session: &Session,
        request: MarkAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        mark::mark_attendance(self, session, request).await
    }

    // 按角色范围查询考勤
    pub async fn list(
        &self,
        session: &Session,
        query: AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>> {
        list::list_attendance(self, session, query).await
    }

    // 学生本人的考勤汇总
    pub async fn student_view(&self, session: &Session) -> Result<StudentAttendanceView> {
        list::student_attendance(self, session).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;
    use crate::directory::Directory;
    use crate::models::{
        common::Selection, teachers::entities::Assignment, users::entities::UserProfile,
    };
    use crate::storage::memory_storage::MemoryStorage;

    fn service() -> AttendanceService {
        AttendanceService::new(
            Directory::seeded().into_shared(),
            Arc::new(MemoryStorage::seeded()),
        )
    }

    fn teacher_session(assignments: Vec<Assignment>) -> Session {
        let mut teacher = Directory::seeded().teacher("teacher1").unwrap().clone();
        teacher.classes = assignments;
        Session::new(UserProfile::Teacher(teacher), Some("mock-token-1".into()))
    }

    fn student_session(id: &str) -> Session {
        let student = Directory::seeded().student(id).unwrap().clone();
        Session::new(UserProfile::Student(student), None)
    }

    fn admin_session() -> Session {
        let admin = Directory::seeded().admins()[0].clone();
        Session::new(UserProfile::Admin(admin), None)
    }

    fn request(class: u8, section: &str, subject: &str, marks: &[(&str, bool)]) -> MarkAttendanceRequest {
        MarkAttendanceRequest {
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            class_id: Some(class),
            section: Some(section.into()),
            subject_id: Some(subject.into()),
            marks: marks
                .iter()
                .map(|(id, present)| (id.to_string(), *present))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[tokio::test]
    async fn test_assigned_teacher_marks_attendance() {
        let service = service();
        let session = teacher_session(vec![Assignment::new(5, "A", "math_pri")]);
        let record = service
            .mark(
                &session,
                request(5, "A", "math_pri", &[("student1", true), ("student5", false)]),
            )
            .await
            .unwrap();
        assert!(record.was_present("student1"));
        assert!(record.absent_students.contains("student5"));
        assert_eq!(record.teacher_id, "teacher1");

        let listed = service
            .list(&session, AttendanceQuery::for_class(5, "A"))
            .await
            .unwrap();
        assert_eq!(listed.first(), Some(&record));
    }

    #[tokio::test]
    async fn test_unassigned_section_is_rejected() {
        let service = service();
        let session = teacher_session(vec![Assignment::new(5, "A", "math_pri")]);
        let err = service
            .mark(&session, request(5, "B", "math_pri", &[]))
            .await
            .unwrap_err();
        assert!(err.is_authorization());
        assert_eq!(
            err.message(),
            "You are not assigned to teach this class, section, or subject."
        );
    }

    #[tokio::test]
    async fn test_missing_selection_is_a_validation_error() {
        let service = service();
        let mut req = request(5, "A", "math_pri", &[("student1", true)]);
        req.subject_id = None;
        let err = service.mark(&admin_session(), req).await.unwrap_err();
        assert_eq!(err.message(), "Please select class, section, and subject.");
    }

    #[tokio::test]
    async fn test_subject_must_be_taught_in_class() {
        let service = service();
        let admin = admin_session();

        let err = service
            .mark(&admin, request(5, "A", "ghost_subject", &[("student1", true)]))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Unknown subject: ghost_subject");

        let err = service
            .mark(&admin, request(5, "A", "phy_sec", &[("student1", true)]))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Physics is not taught in class 5");

        let err = service
            .mark(&admin, request(5, "D", "math_pri", &[]))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Class 5 has no section D");

        let records = service
            .list(&admin, AttendanceQuery::for_class(5, "A"))
            .await
            .unwrap();
        assert!(records
            .iter()
            .all(|r| r.subject_id != "ghost_subject" && r.subject_id != "phy_sec"));
    }

    #[tokio::test]
    async fn test_marks_must_come_from_roster() {
        let service = service();
        let err = service
            .mark(
                &admin_session(),
                request(5, "A", "math_pri", &[("student1", true), ("student2", true)]),
            )
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_students_cannot_mark() {
        let service = service();
        let err = service
            .mark(&student_session("student1"), request(5, "A", "math_pri", &[("student1", true)]))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Students cannot modify attendance or results.");
    }

    #[tokio::test]
    async fn test_teacher_list_is_scoped_to_assignments() {
        let service = service();
        let session = teacher_session(vec![Assignment::new(6, "B", "math_mid")]);
        let records = service
            .list(&session, AttendanceQuery::default())
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].class_id, 6);
    }

    #[tokio::test]
    async fn test_student_sees_only_own_records() {
        let service = service();
        let admin = admin_session();
        service
            .mark(&admin, request(5, "A", "eng_pri", &[("student5", true)]))
            .await
            .unwrap();
        service
            .mark(&admin, request(5, "A", "evs_pri", &[("student1", false), ("student5", true)]))
            .await
            .unwrap();

        let session = student_session("student1");
        let records = service
            .list(&session, AttendanceQuery::for_class(5, "A"))
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.involves("student1")));

        let view = service.student_view(&session).await.unwrap();
        assert_eq!(view.total, 2);
        assert_eq!(view.present, 1);
        for entry in &view.entries {
            assert_eq!(entry.present, entry.record.was_present("student1"));
        }

        let other_class = AttendanceQuery {
            class_id: Selection::One(6),
            ..Default::default()
        };
        assert!(service.list(&session, other_class).await.unwrap_err().is_authorization());
    }
}
