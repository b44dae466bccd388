use std::collections::BTreeSet;

use tracing::info;

use super::AttendanceService;
use crate::errors::{ErpError, Result};
use crate::models::{
    attendance::{entities::AttendanceRecord, requests::MarkAttendanceRequest},
    auth::Session,
};
use crate::services::guard::{AccessGuard, Operation};

pub async fn mark_attendance(
    service: &AttendanceService,
    session: &Session,
    request: MarkAttendanceRequest,
) -> Result<AttendanceRecord> {
    let (Some(class_id), Some(section), Some(subject_id)) =
        (request.class_id, request.section, request.subject_id)
    else {
        return Err(ErpError::validation(
            "Please select class, section, and subject.",
        ));
    };

    let principal = session.principal();
    let (present_students, absent_students) = {
        let directory = service.directory.read().await;
        // 只接受选择器能给出的 (班级, 分班, 科目)
        directory.ensure_class_section(class_id, &section)?;
        directory.taught_subject(&subject_id, class_id)?;
        AccessGuard::check(&principal, Operation::Write, class_id, &section, &subject_id)?;

        if let Some(stranger) = request
            .marks
            .keys()
            .find(|id| !directory.student(id).is_some_and(|s| s.belongs_to(class_id, &section)))
        {
            return Err(ErpError::validation(format!(
                "{} is not in class {}{}",
                directory.student_name(stranger),
                class_id,
                section
            )));
        }

        let mut present = BTreeSet::new();
        let mut absent = BTreeSet::new();
        for (student_id, was_present) in request.marks {
            if was_present {
                present.insert(student_id);
            } else {
                absent.insert(student_id);
            }
        }
        (present, absent)
    };

    let record = AttendanceRecord {
        id: String::new(),
        date: request.date,
        class_id,
        section,
        subject_id,
        present_students,
        absent_students,
        teacher_id: session.user_id().to_string(),
    };
    let record = service.storage.append_attendance(record).await?;

    info!(
        "Attendance {} marked for class {}{} {} by {}: {} present, {} absent",
        record.id,
        record.class_id,
        record.section,
        record.subject_id,
        record.teacher_id,
        record.present_students.len(),
        record.absent_students.len()
    );
    Ok(record)
}
