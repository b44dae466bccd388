pub mod add;
pub mod list;

use std::sync::Arc;

use crate::directory::SharedDirectory;
use crate::errors::Result;
use crate::models::{
    auth::Session,
    common::Selection,
    results::{
        entities::StudentResult,
        requests::{AddResultRequest, ResultFilter},
        responses::ResultRow,
    },
};
use crate::storage::Storage;

pub struct ResultService {
    directory: SharedDirectory,
    storage: Arc<dyn Storage>,
}

impl ResultService {
    pub fn new(directory: SharedDirectory, storage: Arc<dyn Storage>) -> Self {
        Self { directory, storage }
    }

    // 录入成绩
    pub async fn add(&self, session: &Session, request: AddResultRequest) -> Result<StudentResult> {
        add::add_result(self, session, request).await
    }

    // 按角色范围查询成绩
    pub async fn list(&self, session: &Session, filter: ResultFilter) -> Result<Vec<ResultRow>> {
        list::list_results(self, session, filter).await
    }

    // 学生本人的成绩单
    pub async fn student_view(
        &self,
        session: &Session,
        exam_id: Selection<String>,
        subject_id: Selection<String>,
    ) -> Result<Vec<ResultRow>> {
        list::student_results(self, session, exam_id, subject_id).await
    }
}
