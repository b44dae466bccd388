use chrono::NaiveDate;
use tracing::debug;

use super::DashboardService;
use crate::errors::Result;
use crate::models::{auth::Session, dashboard::responses::DashboardSummary};
use crate::services::events::list::visible_to;

pub async fn build_summary(
    service: &DashboardService,
    session: &Session,
    today: NaiveDate,
) -> Result<DashboardSummary> {
    let principal = session.principal();
    let directory = service.directory.read().await;

    let upcoming_events = directory
        .events()
        .iter()
        .filter(|e| e.start_date_time.date() >= today && visible_to(&principal, e))
        .count() as u32;

    let summary = DashboardSummary {
        role: principal.role(),
        total_students: directory.students().len() as u32,
        total_teachers: directory.teachers().len() as u32,
        total_classes: directory.classes().len() as u32,
        upcoming_events,
        assignment_count: session
            .teacher_assignments
            .as_ref()
            .map(|assignments| assignments.len() as u32),
    };
    debug!("Dashboard summary for {}: {:?}", session.user_id(), summary);
    Ok(summary)
}
