//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_erp_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ErpError {
            $($variant(String),)*
        }

        impl ErpError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ErpError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ErpError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ErpError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ErpError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ErpError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_erp_errors! {
    Validation("E001", "Validation Error"),
    Authorization("E002", "Authorization Error"),
    Authentication("E003", "Authentication Error"),
    NotFound("E004", "Resource Not Found"),
    Serialization("E005", "Serialization Error"),
    DateParse("E006", "Date Parse Error"),
    Configuration("E007", "Configuration Error"),
    StoragePluginNotFound("E008", "Storage Plugin Not Found"),
    StorageOperation("E009", "Storage Operation Error"),
    SessionStore("E010", "Session Store Error"),
}

impl ErpError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为需要在表单字段旁展示的校验错误
    pub fn is_validation(&self) -> bool {
        matches!(self, ErpError::Validation(_))
    }

    /// 是否为越权操作
    pub fn is_authorization(&self) -> bool {
        matches!(self, ErpError::Authorization(_))
    }
}

impl fmt::Display for ErpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ErpError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for ErpError {
    fn from(err: serde_json::Error) -> Self {
        ErpError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ErpError {
    fn from(err: chrono::ParseError) -> Self {
        ErpError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for ErpError {
    fn from(err: config::ConfigError) -> Self {
        ErpError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ErpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErpError::validation("test").code(), "E001");
        assert_eq!(ErpError::authorization("test").code(), "E002");
        assert_eq!(ErpError::authentication("test").code(), "E003");
        assert_eq!(ErpError::session_store("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ErpError::storage_plugin_not_found("test").error_type(),
            "Storage Plugin Not Found"
        );
        assert_eq!(ErpError::validation("test").error_type(), "Validation Error");
    }

    #[test]
    fn test_error_message() {
        let err = ErpError::validation("Marks should be between 0 and 25.");
        assert_eq!(err.message(), "Marks should be between 0 and 25.");
        assert!(err.is_validation());
        assert!(!err.is_authorization());
    }

    #[test]
    fn test_format_simple() {
        let err = ErpError::authorization("You are not assigned to teach this class");
        let formatted = err.format_simple();
        assert!(formatted.contains("Authorization Error"));
        assert!(formatted.contains("not assigned"));
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{oops");
        let err: ErpError = parse.unwrap_err().into();
        assert_eq!(err.code(), "E005");
    }
}
