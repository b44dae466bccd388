use super::EventService;
use crate::errors::Result;
use crate::models::{
    auth::{Principal, Session},
    events::entities::{EventFilter, SchoolEvent},
};

/// 学生只能看到面向全校或包含本人年级的活动
pub fn visible_to(principal: &Principal, event: &SchoolEvent) -> bool {
    match principal {
        Principal::Student { class, .. } => event.applies_to(*class),
        Principal::Admin { .. } | Principal::Teacher { .. } => true,
    }
}

pub async fn list_events(
    service: &EventService,
    session: &Session,
    filter: EventFilter,
) -> Result<Vec<SchoolEvent>> {
    let principal = session.principal();
    let directory = service.directory.read().await;

    let mut events: Vec<SchoolEvent> = directory
        .events()
        .iter()
        .filter(|e| visible_to(&principal, e))
        .filter(|e| filter.event_type.matches(&e.event_type))
        .filter(|e| filter.on_date.is_none_or(|d| e.starts_on(d)))
        .cloned()
        .collect();
    events.sort_by_key(|e| e.start_date_time);
    Ok(events)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::directory::Directory;
    use crate::models::{
        common::Selection, events::entities::EventType, users::entities::UserProfile,
    };

    fn session_for(profile: UserProfile) -> Session {
        Session::new(profile, None)
    }

    #[tokio::test]
    async fn test_students_only_see_their_classes() {
        let dir = Directory::seeded();
        let junior = session_for(UserProfile::Student(dir.student("student1").unwrap().clone()));
        let senior = session_for(UserProfile::Student(dir.student("student3").unwrap().clone()));
        let service = EventService::new(dir.into_shared());

        let junior_events = service.list(&junior, EventFilter::default()).await.unwrap();
        assert!(junior_events.iter().all(|e| e.id != "event4"));
        assert_eq!(junior_events.len(), 3);

        let senior_events = service.list(&senior, EventFilter::default()).await.unwrap();
        assert_eq!(senior_events.len(), 4);
        assert_eq!(senior_events[0].id, "event4");
    }

    #[tokio::test]
    async fn test_type_and_date_filters() {
        let dir = Directory::seeded();
        let admin = session_for(UserProfile::Admin(dir.admins()[0].clone()));
        let service = EventService::new(dir.into_shared());

        let holidays = service
            .list(
                &admin,
                EventFilter {
                    event_type: Selection::One(EventType::Holiday),
                    on_date: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].id, "event3");

        let on_sports_day = service
            .list(
                &admin,
                EventFilter {
                    event_type: Selection::All,
                    on_date: NaiveDate::from_ymd_opt(2023, 12, 10),
                },
            )
            .await
            .unwrap();
        assert_eq!(on_sports_day.len(), 1);
        assert_eq!(on_sports_day[0].id, "event1");
    }
}
