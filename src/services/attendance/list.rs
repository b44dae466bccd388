use tracing::debug;

use super::AttendanceService;
use crate::errors::{ErpError, Result};
use crate::models::{
    attendance::{
        entities::AttendanceRecord,
        requests::AttendanceQuery,
        responses::{StudentAttendanceEntry, StudentAttendanceView},
    },
    auth::{Principal, Session},
    common::Selection,
};
use crate::services::guard::{AccessGuard, Operation, is_authorized};
use crate::utils::display::percentage;

pub async fn list_attendance(
    service: &AttendanceService,
    session: &Session,
    mut query: AttendanceQuery,
) -> Result<Vec<AttendanceRecord>> {
    let principal = session.principal();

    match &principal {
        Principal::Admin { .. } => service.storage.query_attendance(&query).await,
        Principal::Teacher { .. } => {
            let records = service.storage.query_attendance(&query).await?;
            let total = records.len();
            let scoped: Vec<AttendanceRecord> = records
                .into_iter()
                .filter(|r| {
                    is_authorized(&principal, Operation::Read, r.class_id, &r.section, &r.subject_id)
                })
                .collect();
            debug!(
                "Teacher {} sees {} of {} attendance records",
                principal.user_id(),
                scoped.len(),
                total
            );
            Ok(scoped)
        }
        Principal::Student {
            user_id,
            class,
            section,
        } => {
            // 学生的查询强制限定为本人班级、分班与本人记录
            let requested_class = query.class_id.as_one().copied().unwrap_or(*class);
            let requested_section = query.section.as_one().cloned().unwrap_or_else(|| section.clone());
            let subject = query.subject_id.as_one().cloned().unwrap_or_default();
            AccessGuard::check(&principal, Operation::Read, requested_class, &requested_section, &subject)?;

            if !query.student_id.matches_str(user_id) {
                return Err(ErpError::authorization(
                    "Students can only view their own attendance.",
                ));
            }
            query.class_id = Selection::One(*class);
            query.section = Selection::One(section.clone());
            query.student_id = Selection::One(user_id.clone());
            service.storage.query_attendance(&query).await
        }
    }
}

pub async fn student_attendance(
    service: &AttendanceService,
    session: &Session,
) -> Result<StudentAttendanceView> {
    let Some(student) = session.student() else {
        return Err(ErpError::authorization(
            "Only students have a personal attendance view.",
        ));
    };

    let records = list_attendance(service, session, AttendanceQuery::default()).await?;
    let directory = service.directory.read().await;

    let entries: Vec<StudentAttendanceEntry> = records
        .into_iter()
        .map(|record| StudentAttendanceEntry {
            subject_name: directory.subject_name(&record.subject_id).to_string(),
            present: record.was_present(&student.id),
            record,
        })
        .collect();

    let total = entries.len() as u32;
    let present = entries.iter().filter(|e| e.present).count() as u32;
    Ok(StudentAttendanceView {
        entries,
        present,
        total,
        percentage: percentage(present, total),
    })
}
