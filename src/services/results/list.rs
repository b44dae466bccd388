use std::collections::BTreeSet;

use super::ResultService;
use crate::directory::Directory;
use crate::errors::{ErpError, Result};
use crate::models::{
    auth::{Principal, Session},
    common::Selection,
    results::{
        entities::{GradeBand, StudentResult},
        requests::{ResultFilter, ResultQuery},
        responses::ResultRow,
    },
};
use crate::services::guard::{Operation, is_authorized};
use crate::utils::display::percentage;

fn to_row(directory: &Directory, result: StudentResult) -> ResultRow {
    let max_marks = directory.exam_max_marks(&result.exam_id);
    let percentage = percentage(result.marks_obtained.max(0) as u32, max_marks);
    ResultRow {
        student_name: directory.student_name(&result.student_id).to_string(),
        subject_name: directory.subject_name(&result.subject_id).to_string(),
        exam_name: directory.exam_name(&result.exam_id).to_string(),
        max_marks,
        percentage,
        band: GradeBand::from_percentage(percentage),
        result,
    }
}

pub async fn list_results(
    service: &ResultService,
    session: &Session,
    filter: ResultFilter,
) -> Result<Vec<ResultRow>> {
    let principal = session.principal();
    let directory = service.directory.read().await;

    // 成绩没有班级字段，班级/分班条件转换为名册约束
    let roster = if filter.class_id.is_all() && filter.section.is_all() {
        None
    } else {
        Some(
            directory
                .students()
                .iter()
                .filter(|s| filter.class_id.matches(&s.class) && filter.section.matches(&s.section))
                .map(|s| s.id.clone())
                .collect::<BTreeSet<String>>(),
        )
    };

    let mut query = ResultQuery {
        student_id: filter.student_id,
        exam_id: filter.exam_id,
        subject_id: filter.subject_id,
        roster,
    };
    if let Principal::Student { user_id, .. } = &principal {
        if !query.student_id.matches_str(user_id) {
            return Err(ErpError::authorization(
                "Students can only view their own results.",
            ));
        }
        query.student_id = Selection::One(user_id.clone());
    }

    let results = service.storage.query_results(&query).await?;
    Ok(results
        .into_iter()
        .filter(|r| match &principal {
            Principal::Teacher { .. } => directory.student(&r.student_id).is_some_and(|s| {
                is_authorized(&principal, Operation::Read, s.class, &s.section, &r.subject_id)
            }),
            _ => true,
        })
        .map(|r| to_row(&directory, r))
        .collect())
}

pub async fn student_results(
    service: &ResultService,
    session: &Session,
    exam_id: Selection<String>,
    subject_id: Selection<String>,
) -> Result<Vec<ResultRow>> {
    let Some(student) = session.student() else {
        return Err(ErpError::authorization(
            "Only students have a personal results view.",
        ));
    };
    let filter = ResultFilter {
        student_id: Selection::One(student.id.clone()),
        exam_id,
        subject_id,
        ..Default::default()
    };
    list_results(service, session, filter).await
}
