use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{
    students::entities::Student,
    teachers::entities::Assignment,
    users::entities::{UserProfile, UserRole},
};

// 登录请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../ui/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// 当前会话
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/auth.ts")]
pub struct Session {
    pub user: UserProfile,
    pub role: UserRole,
    pub token: Option<String>,
    /// 仅教师会话携带
    pub teacher_assignments: Option<Vec<Assignment>>,
}

impl Session {
    pub fn new(user: UserProfile, token: Option<String>) -> Self {
        let teacher_assignments = match &user {
            UserProfile::Teacher(t) => Some(t.classes.clone()),
            _ => None,
        };
        Self {
            role: user.role(),
            user,
            token,
            teacher_assignments,
        }
    }

    pub fn user_id(&self) -> &str {
        self.user.id()
    }

    pub fn student(&self) -> Option<&Student> {
        match &self.user {
            UserProfile::Student(s) => Some(s),
            _ => None,
        }
    }

    /// 构造访问控制使用的主体
    pub fn principal(&self) -> Principal {
        match &self.user {
            UserProfile::Admin(a) => Principal::Admin {
                user_id: a.id.clone(),
            },
            UserProfile::Teacher(t) => Principal::Teacher {
                user_id: t.id.clone(),
                assignments: self
                    .teacher_assignments
                    .clone()
                    .unwrap_or_else(|| t.classes.clone()),
            },
            UserProfile::Student(s) => Principal::Student {
                user_id: s.id.clone(),
                class: s.class,
                section: s.section.clone(),
            },
        }
    }
}

/// 访问控制主体：角色 + 教师分配 / 学生本人班级
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    Admin {
        user_id: String,
    },
    Teacher {
        user_id: String,
        assignments: Vec<Assignment>,
    },
    Student {
        user_id: String,
        class: crate::models::common::ClassNumber,
        section: String,
    },
}

impl Principal {
    pub fn role(&self) -> UserRole {
        match self {
            Principal::Admin { .. } => UserRole::Admin,
            Principal::Teacher { .. } => UserRole::Teacher,
            Principal::Student { .. } => UserRole::Student,
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            Principal::Admin { user_id }
            | Principal::Teacher { user_id, .. }
            | Principal::Student { user_id, .. } => user_id,
        }
    }

    /// 教师的分配列表；其他角色为空切片
    pub fn assignments(&self) -> &[Assignment] {
        match self {
            Principal::Teacher { assignments, .. } => assignments,
            _ => &[],
        }
    }
}
