use tracing::info;

use super::ResultService;
use crate::errors::{ErpError, Result};
use crate::models::{
    auth::Session,
    results::{entities::StudentResult, requests::AddResultRequest},
};
use crate::services::guard::{AccessGuard, Operation};

pub async fn add_result(
    service: &ResultService,
    session: &Session,
    request: AddResultRequest,
) -> Result<StudentResult> {
    let AddResultRequest {
        class_id: Some(class_id),
        section: Some(section),
        subject_id: Some(subject_id),
        exam_id: Some(exam_id),
        student_id: Some(student_id),
        marks_obtained: Some(marks_obtained),
        remarks,
    } = request
    else {
        return Err(ErpError::validation("Please fill in all required fields."));
    };

    let principal = session.principal();
    let (exam, student) = {
        let directory = service.directory.read().await;

        let exam = directory
            .exam(&exam_id)
            .cloned()
            .ok_or_else(|| ErpError::not_found(format!("Exam {exam_id} not found")))?;
        if !exam.applies_to(class_id) {
            return Err(ErpError::validation(format!(
                "{} is not held for class {}",
                exam.name, class_id
            )));
        }
        directory.taught_subject(&subject_id, class_id)?;
        if !exam.accepts_marks(marks_obtained) {
            return Err(ErpError::validation(format!(
                "Marks should be between 0 and {}.",
                exam.max_marks
            )));
        }

        let student = directory
            .student(&student_id)
            .cloned()
            .ok_or_else(|| ErpError::not_found(format!("Student {student_id} not found")))?;
        if !student.belongs_to(class_id, &section) {
            return Err(ErpError::validation(format!(
                "{} is not in class {}{}",
                student.name, class_id, section
            )));
        }
        (exam, student)
    };

    // 权限按学生所在班级与分班校验
    AccessGuard::check(
        &principal,
        Operation::Write,
        student.class,
        &student.section,
        &subject_id,
    )?;

    let result = StudentResult {
        id: String::new(),
        student_id,
        exam_id,
        subject_id,
        marks_obtained,
        remarks: remarks.filter(|r| !r.trim().is_empty()),
        teacher_id: session.user_id().to_string(),
    };
    let result = service.storage.append_result(result, &exam).await?;

    info!(
        "Result {} recorded for {} in {} ({}/{}) by {}",
        result.id,
        student.name,
        exam.name,
        result.marks_obtained,
        exam.max_marks,
        result.teacher_id
    );
    Ok(result)
}
