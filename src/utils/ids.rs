//! 记录 ID 与模拟令牌生成

/// 生成带前缀的唯一 ID，例如 `record-5f0c...`
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}

/// 生成模拟会话令牌：`<prefix>-<毫秒时间戳>`
pub fn mock_token(prefix: &str) -> String {
    format!("{prefix}-{}", chrono::Utc::now().timestamp_millis())
}
