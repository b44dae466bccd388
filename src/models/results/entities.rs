use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/result.ts")]
pub struct StudentResult {
    pub id: String,
    pub student_id: String,
    pub exam_id: String,
    pub subject_id: String,
    pub marks_obtained: i32,
    pub remarks: Option<String>,
    pub teacher_id: String,
}

// 成绩等级（按百分比划分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../ui/src/types/generated/result.ts")]
pub enum GradeBand {
    Excellent, // >= 75%
    Good,      // >= 60%
    Pass,      // >= 33%
    Fail,
}

impl GradeBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            GradeBand::Excellent
        } else if percentage >= 60.0 {
            GradeBand::Good
        } else if percentage >= 33.0 {
            GradeBand::Pass
        } else {
            GradeBand::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(GradeBand::from_percentage(88.0), GradeBand::Excellent);
        assert_eq!(GradeBand::from_percentage(75.0), GradeBand::Excellent);
        assert_eq!(GradeBand::from_percentage(60.0), GradeBand::Good);
        assert_eq!(GradeBand::from_percentage(33.0), GradeBand::Pass);
        assert_eq!(GradeBand::from_percentage(32.9), GradeBand::Fail);
    }
}
