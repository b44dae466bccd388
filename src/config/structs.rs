use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub auth: AuthConfig,
    pub access: AccessConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 登录与会话快照配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub login_delay_ms: u64, // 模拟凭据校验的固定延迟 (毫秒)
    pub user_key: String,    // 用户资料快照的键
    pub token_key: String,   // 会话令牌的键
    pub token_prefix: String,
}

/// 访问控制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// 教师在某班级没有任何分配时，是否返回空的分班列表。
    /// 关闭时沿用既有行为：回退为该班级的全部分班。
    pub strict_section_fallback: bool,
}

/// 记录存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: String,
}

/// 会话存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub backend: String,
}
