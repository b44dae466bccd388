pub mod summary;

use chrono::NaiveDate;

use crate::directory::SharedDirectory;
use crate::errors::Result;
use crate::models::{auth::Session, dashboard::responses::DashboardSummary};

pub struct DashboardService {
    directory: SharedDirectory,
}

impl DashboardService {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    // 仪表盘汇总
    pub async fn summary(&self, session: &Session, today: NaiveDate) -> Result<DashboardSummary> {
        summary::build_summary(self, session, today).await
    }
}
