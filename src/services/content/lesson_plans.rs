use tracing::info;

use super::{ContentService, matches_search, visible_to};
use crate::errors::{ErpError, Result};
use crate::models::{
    auth::Session,
    content::{
        entities::LessonPlan,
        requests::{CreateLessonPlanRequest, LessonPlanFilter},
    },
};
use crate::services::guard::{AccessGuard, Operation};
use crate::utils::new_id;

pub async fn list_lesson_plans(
    service: &ContentService,
    session: &Session,
    filter: LessonPlanFilter,
) -> Result<Vec<LessonPlan>> {
    let principal = session.principal();
    let today = filter
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let directory = service.directory.read().await;

    Ok(directory
        .lesson_plans()
        .iter()
        .filter(|p| visible_to(&principal, &p.teacher_id, p.class_id, &p.section))
        .filter(|p| matches_search(&filter.search, &[p.title.as_str(), p.description.as_str()]))
        .filter(|p| filter.timeline.matches(&p.date_range, today))
        .cloned()
        .collect())
}

pub async fn create_lesson_plan(
    service: &ContentService,
    session: &Session,
    request: CreateLessonPlanRequest,
) -> Result<LessonPlan> {
    if request.title.trim().is_empty() {
        return Err(ErpError::validation("Please fill in all required fields."));
    }
    if request.date_range.start > request.date_range.end {
        return Err(ErpError::validation("End date must not be before start date."));
    }

    let principal = session.principal();
    AccessGuard::check(
        &principal,
        Operation::Write,
        request.class_id,
        &request.section,
        &request.subject_id,
    )?;

    let plan = LessonPlan {
        id: new_id("lp"),
        title: request.title.trim().to_string(),
        description: request.description,
        class_id: request.class_id,
        section: request.section,
        subject_id: request.subject_id,
        teacher_id: session.user_id().to_string(),
        date_created: chrono::Local::now().date_naive(),
        date_range: request.date_range,
        content: request.content,
        attachments: request.attachments,
    };
    service.directory.write().await.lesson_plans.push(plan.clone());

    info!("Lesson plan {} created by {}", plan.id, plan.teacher_id);
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::directory::Directory;
    use crate::models::{
        content::{entities::DateRange, requests::PlanTimeline},
        users::entities::UserProfile,
    };

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, day).unwrap()
    }

    fn teacher_session(id: &str) -> Session {
        Session::new(
            UserProfile::Teacher(Directory::seeded().teacher(id).unwrap().clone()),
            None,
        )
    }

    fn plan_request(section: &str) -> CreateLessonPlanRequest {
        CreateLessonPlanRequest {
            title: "Decimals".into(),
            description: "Place value and decimals".into(),
            class_id: 5,
            section: section.into(),
            subject_id: "math_pri".into(),
            date_range: DateRange {
                start: d(5, 1),
                end: d(5, 7),
            },
            content: "Week 1: Tenths and hundredths".into(),
            attachments: vec![],
        }
    }

    #[tokio::test]
    async fn test_teacher_sees_own_plans_with_timeline() {
        let service = ContentService::new(Directory::seeded().into_shared());
        let session = teacher_session("teacher1");

        let all = service
            .lesson_plans(&session, LessonPlanFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "lp1");

        let past = service
            .lesson_plans(
                &session,
                LessonPlanFilter {
                    timeline: PlanTimeline::Past,
                    today: Some(d(4, 12)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(past.is_empty());
    }

    #[tokio::test]
    async fn test_create_plan_requires_assignment() {
        let service = ContentService::new(Directory::seeded().into_shared());
        let session = teacher_session("teacher1");

        let err = service
            .create_lesson_plan(&session, plan_request("B"))
            .await
            .unwrap_err();
        assert!(err.is_authorization());

        let plan = service
            .create_lesson_plan(&session, plan_request("A"))
            .await
            .unwrap();
        let found = service
            .lesson_plans(
                &session,
                LessonPlanFilter {
                    search: "decimal".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(found, vec![plan]);
    }

    #[tokio::test]
    async fn test_inverted_date_range_is_rejected() {
        let service = ContentService::new(Directory::seeded().into_shared());
        let mut request = plan_request("A");
        request.date_range = DateRange {
            start: d(5, 7),
            end: d(5, 1),
        };
        let err = service
            .create_lesson_plan(&teacher_session("teacher1"), request)
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
