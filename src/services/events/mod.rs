pub mod list;

use crate::directory::SharedDirectory;
use crate::errors::Result;
use crate::models::{
    auth::Session,
    events::entities::{EventFilter, SchoolEvent},
};

pub struct EventService {
    directory: SharedDirectory,
}

impl EventService {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    // 校园活动列表
    pub async fn list(&self, session: &Session, filter: EventFilter) -> Result<Vec<SchoolEvent>> {
        list::list_events(self, session, filter).await
    }
}
