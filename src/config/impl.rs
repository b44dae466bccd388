use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 环境变量前缀；层级之间用 `__` 分隔，字段名自身的 `_` 保持不变，
/// 例如 `ERP__AUTH__LOGIN_DELAY_MS` 对应 `auth.login_delay_ms`
const ENV_PREFIX: &str = "ERP";
const ENV_SEPARATOR: &str = "__";

fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能启动
            .set_default("app.system_name", "Vidya ERP")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("auth.login_delay_ms", 1000)?
            .set_default("auth.user_key", "erpUser")?
            .set_default("auth.token_key", "erpToken")?
            .set_default("auth.token_prefix", "mock-token")?
            .set_default("access.strict_section_fallback", false)?
            .set_default("storage.backend", "memory")?
            .set_default("session.backend", "memory")?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(env_overrides());

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 登录时的模拟延迟
    pub fn login_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.auth.login_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load_without_files() {
        let config = AppConfig::load().expect("defaults should deserialize");
        assert_eq!(config.auth.user_key, "erpUser");
        assert_eq!(config.auth.token_key, "erpToken");
        assert_eq!(config.storage.backend, "memory");
        assert!(!config.access.strict_section_fallback);
    }

    #[test]
    fn test_env_keys_use_double_underscore_between_levels() {
        let mut vars = config::Map::new();
        vars.insert("ERP__AUTH__LOGIN_DELAY_MS".to_string(), "0".to_string());
        vars.insert("ERP_STORAGE_BACKEND".to_string(), "postgres".to_string());

        let config = Config::builder()
            .set_default("auth.login_delay_ms", 1000)
            .unwrap()
            .set_default("storage.backend", "memory")
            .unwrap()
            .add_source(env_overrides().source(Some(vars)))
            .build()
            .unwrap();

        assert_eq!(config.get::<u64>("auth.login_delay_ms").unwrap(), 0);
        // 单下划线不会被识别为层级
        assert_eq!(config.get::<String>("storage.backend").unwrap(), "memory");
    }
}
