use serde::Serialize;
use ts_rs::TS;

use crate::models::users::entities::UserRole;

// 仪表盘汇总
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/dashboard.ts")]
pub struct DashboardSummary {
    pub role: UserRole,
    pub total_students: u32,
    pub total_teachers: u32,
    pub total_classes: u32,
    pub upcoming_events: u32,
    /// 教师的分配数量；其他角色为 None
    pub assignment_count: Option<u32>,
}
