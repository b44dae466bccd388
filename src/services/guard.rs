//! 访问守卫
//!
//! 在任何写入被接受之前调用；拒绝时返回带原因的 Authorization 错误，
//! 而不是静默忽略。

use tracing::warn;

use crate::errors::{ErpError, Result};
use crate::models::{auth::Principal, common::ClassNumber};

pub const NOT_ASSIGNED: &str = "You are not assigned to teach this class, section, or subject.";
pub const STUDENT_READ_ONLY: &str = "Students cannot modify attendance or results.";
pub const STUDENT_OWN_CLASS_ONLY: &str = "Students can only view their own class and section.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

/// 判断主体能否对 (班级, 分班, 科目) 执行操作
///
/// - 管理员：总是允许
/// - 教师：分配列表中存在三个字段完全相同的条目
/// - 学生：只读，且仅限本人班级与分班
pub fn is_authorized(
    principal: &Principal,
    operation: Operation,
    class_id: ClassNumber,
    section: &str,
    subject_id: &str,
) -> bool {
    denial_reason(principal, operation, class_id, section, subject_id).is_none()
}

fn denial_reason(
    principal: &Principal,
    operation: Operation,
    class_id: ClassNumber,
    section: &str,
    subject_id: &str,
) -> Option<&'static str> {
    match principal {
        Principal::Admin { .. } => None,
        Principal::Teacher { assignments, .. } => {
            if assignments
                .iter()
                .any(|a| a.matches(class_id, section, subject_id))
            {
                None
            } else {
                Some(NOT_ASSIGNED)
            }
        }
        Principal::Student {
            class,
            section: own_section,
            ..
        } => match operation {
            Operation::Write => Some(STUDENT_READ_ONLY),
            Operation::Read if *class == class_id && own_section == section => None,
            Operation::Read => Some(STUDENT_OWN_CLASS_ONLY),
        },
    }
}

pub struct AccessGuard;

impl AccessGuard {
    pub fn check(
        principal: &Principal,
        operation: Operation,
        class_id: ClassNumber,
        section: &str,
        subject_id: &str,
    ) -> Result<()> {
        match denial_reason(principal, operation, class_id, section, subject_id) {
            None => Ok(()),
            Some(reason) => {
                warn!(
                    "{} {} denied {:?} on class {} section {} subject {}",
                    principal.role(),
                    principal.user_id(),
                    operation,
                    class_id,
                    section,
                    subject_id
                );
                Err(ErpError::authorization(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::teachers::entities::Assignment;

    fn teacher(assignments: &[Assignment]) -> Principal {
        Principal::Teacher {
            user_id: "teacher1".into(),
            assignments: assignments.to_vec(),
        }
    }

    #[test]
    fn test_admin_is_always_authorized() {
        let admin = Principal::Admin {
            user_id: "admin1".into(),
        };
        assert!(is_authorized(&admin, Operation::Write, 10, "C", "anything"));
    }

    #[test]
    fn test_teacher_needs_exact_triple() {
        let assignments = [
            Assignment::new(5, "A", "math_pri"),
            Assignment::new(6, "B", "math_mid"),
        ];
        let t = teacher(&assignments);

        for a in &assignments {
            for op in [Operation::Read, Operation::Write] {
                assert!(is_authorized(&t, op, a.class_id, &a.section, &a.subject_id));
            }
        }

        // 只匹配两个字段不算授权
        assert!(!is_authorized(&t, Operation::Write, 5, "B", "math_pri"));
        assert!(!is_authorized(&t, Operation::Write, 5, "A", "math_mid"));
        assert!(!is_authorized(&t, Operation::Write, 6, "A", "math_pri"));
        assert!(!is_authorized(&t, Operation::Read, 6, "A", "math_mid"));
    }

    #[test]
    fn test_teacher_triples_across_grid() {
        let assignments = [
            Assignment::new(3, "A", "hin_pri"),
            Assignment::new(6, "C", "sst_mid"),
        ];
        let t = teacher(&assignments);
        for class_id in 1..=10u8 {
            for section in ["A", "B", "C"] {
                for subject in ["hin_pri", "sst_mid", "math_pri"] {
                    let expected = assignments
                        .iter()
                        .any(|a| a.matches(class_id, section, subject));
                    assert_eq!(
                        is_authorized(&t, Operation::Write, class_id, section, subject),
                        expected
                    );
                }
            }
        }
    }

    #[test]
    fn test_student_read_only_own_class() {
        let s = Principal::Student {
            user_id: "student1".into(),
            class: 5,
            section: "A".into(),
        };
        assert!(is_authorized(&s, Operation::Read, 5, "A", "math_pri"));
        assert!(!is_authorized(&s, Operation::Read, 5, "B", "math_pri"));

        let err = AccessGuard::check(&s, Operation::Write, 5, "A", "math_pri").unwrap_err();
        assert_eq!(err.message(), STUDENT_READ_ONLY);
        let err = AccessGuard::check(&s, Operation::Read, 6, "A", "math_mid").unwrap_err();
        assert_eq!(err.message(), STUDENT_OWN_CLASS_ONLY);
    }

    #[test]
    fn test_check_reports_reason() {
        let t = teacher(&[Assignment::new(5, "A", "math_pri")]);
        let err = AccessGuard::check(&t, Operation::Write, 5, "B", "math_pri").unwrap_err();
        assert!(err.is_authorization());
        assert_eq!(err.message(), NOT_ASSIGNED);
        assert!(AccessGuard::check(&t, Operation::Write, 5, "A", "math_pri").is_ok());
    }
}
