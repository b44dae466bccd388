//! 成绩存储操作

use tracing::warn;

use super::MemoryStorage;
use crate::errors::{ErpError, Result};
use crate::models::{
    exams::entities::Exam,
    results::{entities::StudentResult, requests::ResultQuery},
};
use crate::utils::new_id;

impl MemoryStorage {
    /// 写入成绩，分数越界时拒绝
    pub async fn append_result_impl(&self, mut result: StudentResult, exam: &Exam) -> Result<StudentResult> {
        if result.exam_id != exam.id {
            return Err(ErpError::storage_operation(format!(
                "Result for exam {} validated against exam {}",
                result.exam_id, exam.id
            )));
        }
        if !exam.accepts_marks(result.marks_obtained) {
            warn!(
                "Rejected marks {} for {} in {} (max {})",
                result.marks_obtained, result.student_id, exam.id, exam.max_marks
            );
            return Err(ErpError::validation(format!(
                "Marks should be between 0 and {}.",
                exam.max_marks
            )));
        }

        result.id = new_id("result");
        self.results.write().await.push(result.clone());
        Ok(result)
    }

    /// 查询成绩
    pub async fn query_results_impl(&self, query: &ResultQuery) -> Result<Vec<StudentResult>> {
        let results = self.results.read().await;
        Ok(results.iter().filter(|r| query.matches(r)).cloned().collect())
    }
}
