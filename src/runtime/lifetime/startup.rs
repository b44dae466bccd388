use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::directory::{Directory, SharedDirectory};
use crate::errors::Result;
use crate::services::{
    AttendanceService, AuthService, ContentService, DashboardService, EventService, ResultService,
};
use crate::session::{KeyValueStore, create_session_store};
use crate::storage::Storage;

pub struct EngineContext {
    pub directory: SharedDirectory,
    pub storage: Arc<dyn Storage>,
    pub session_store: Arc<dyn KeyValueStore>,
}

impl EngineContext {
    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.directory.clone(), self.session_store.clone())
    }

    pub fn attendance_service(&self) -> AttendanceService {
        AttendanceService::new(self.directory.clone(), self.storage.clone())
    }

    pub fn result_service(&self) -> ResultService {
        ResultService::new(self.directory.clone(), self.storage.clone())
    }

    pub fn event_service(&self) -> EventService {
        EventService::new(self.directory.clone())
    }

    pub fn content_service(&self) -> ContentService {
        ContentService::new(self.directory.clone())
    }

    pub fn dashboard_service(&self) -> DashboardService {
        DashboardService::new(self.directory.clone())
    }
}

/// 检查模拟数据中引用不到的分配，仅记录日志
fn audit_assignments(directory: &Directory) {
    for teacher in directory.teachers() {
        for a in &teacher.classes {
            let applicable = directory
                .subject(&a.subject_id)
                .is_some_and(|s| s.applies_to(a.class_id));
            if !applicable {
                warn!(
                    "Teacher {} is assigned {} in class {}{}, which is not taught there",
                    teacher.id, a.subject_id, a.class_id, a.section
                );
            }
        }
    }
}

/// 准备引擎启动的上下文
/// 包括目录、记录存储和会话存储
pub async fn prepare_engine_startup() -> Result<EngineContext> {
    let directory = Directory::seeded();
    audit_assignments(&directory);
    debug!(
        "Directory seeded with {} classes, {} subjects",
        directory.classes().len(),
        directory.subjects().len()
    );

    let storage = crate::storage::create_storage().await?;
    info!("Record storage initialized");

    let session_store = create_session_store()?;
    info!("Session store initialized");

    Ok(EngineContext {
        directory: directory.into_shared(),
        storage,
        session_store,
    })
}
