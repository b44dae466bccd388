use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{students::entities::Student, teachers::entities::Teacher};

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../ui/src/types/generated/user.ts")]
pub enum UserRole {
    Admin,   // 管理员
    Teacher, // 教师
    Student, // 学生
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";

    pub fn all_roles() -> &'static [UserRole] {
        &[Self::Admin, Self::Teacher, Self::Student]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid user role: '{s}'. supported roles: admin, teacher, student"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::STUDENT => Ok(UserRole::Student),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 管理员
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/src/types/generated/user.ts")]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub avatar: Option<String>,
}

// 已登录用户的完整资料，按角色区分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "role", rename_all = "snake_case")]
#[ts(export, export_to = "../ui/src/types/generated/user.ts")]
pub enum UserProfile {
    Admin(Admin),
    Teacher(Teacher),
    Student(Student),
}

impl UserProfile {
    pub fn id(&self) -> &str {
        match self {
            UserProfile::Admin(a) => &a.id,
            UserProfile::Teacher(t) => &t.id,
            UserProfile::Student(s) => &s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UserProfile::Admin(a) => &a.name,
            UserProfile::Teacher(t) => &t.name,
            UserProfile::Student(s) => &s.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            UserProfile::Admin(a) => &a.email,
            UserProfile::Teacher(t) => &t.email,
            UserProfile::Student(s) => &s.email,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            UserProfile::Admin(_) => UserRole::Admin,
            UserProfile::Teacher(_) => UserRole::Teacher,
            UserProfile::Student(_) => UserRole::Student,
        }
    }
}

// 模拟登录凭据（明文比较）
#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip_through_str() {
        for role in UserRole::all_roles() {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(&parsed, role);
        }
        assert!("principal".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_rejects_unknown_json() {
        let err = serde_json::from_str::<UserRole>("\"parent\"").unwrap_err();
        assert!(err.to_string().contains("invalid user role"));
    }

    #[test]
    fn test_profile_is_tagged_by_role() {
        let profile = UserProfile::Admin(Admin {
            id: "admin1".into(),
            name: "Rajesh Kumar".into(),
            email: "principal@vidyaerp.com".into(),
            contact_number: "+91 9876543210".into(),
            avatar: None,
        });
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["contactNumber"], "+91 9876543210");
        let back: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back.role(), UserRole::Admin);
    }
}
