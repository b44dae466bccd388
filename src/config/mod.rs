//! 配置管理
//!
//! 默认值 < `config` 文件 < `config.{APP_ENV}` 文件 < `ERP__*` 环境变量
//! （层级用 `__` 分隔，如 `ERP__STORAGE__BACKEND`）。

mod r#impl;
mod structs;

pub use structs::*;
