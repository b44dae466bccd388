use std::cmp::Reverse;

use tracing::info;

use super::{ContentService, matches_search, visible_to};
use crate::errors::{ErpError, Result};
use crate::models::{
    auth::Session,
    content::{entities::RecordedClass, requests::CreateRecordedClassRequest},
};
use crate::services::guard::{AccessGuard, Operation};
use crate::utils::new_id;

pub async fn list_recorded_classes(
    service: &ContentService,
    session: &Session,
    search: &str,
) -> Result<Vec<RecordedClass>> {
    let principal = session.principal();
    let directory = service.directory.read().await;

    let mut classes: Vec<RecordedClass> = directory
        .recorded_classes()
        .iter()
        .filter(|c| visible_to(&principal, &c.teacher_id, c.class_id, &c.section))
        .filter(|c| {
            matches_search(
                search,
                &[
                    c.title.as_str(),
                    c.description.as_str(),
                    directory.subject_name(&c.subject_id),
                ],
            )
        })
        .cloned()
        .collect();
    classes.sort_by_key(|c| Reverse(c.created_at));
    Ok(classes)
}

pub async fn create_recorded_class(
    service: &ContentService,
    session: &Session,
    request: CreateRecordedClassRequest,
) -> Result<RecordedClass> {
    if request.title.trim().is_empty() || request.video_url.trim().is_empty() {
        return Err(ErpError::validation("Please fill in all required fields."));
    }

    let principal = session.principal();
    AccessGuard::check(
        &principal,
        Operation::Write,
        request.class_id,
        &request.section,
        &request.subject_id,
    )?;

    let recorded = RecordedClass {
        id: new_id("rc"),
        title: request.title.trim().to_string(),
        description: request.description,
        class_id: request.class_id,
        section: request.section,
        subject_id: request.subject_id,
        teacher_id: session.user_id().to_string(),
        date_recorded: request.date_recorded,
        duration_minutes: request.duration_minutes,
        video_url: request.video_url,
        thumbnail_url: request.thumbnail_url,
        created_at: chrono::Local::now().naive_local(),
    };
    service
        .directory
        .write()
        .await
        .recorded_classes
        .push(recorded.clone());

    info!("Recorded class {} uploaded by {}", recorded.id, recorded.teacher_id);
    Ok(recorded)
}
