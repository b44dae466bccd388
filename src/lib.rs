//! Vidya ERP - 按分配限定范围的学校访问引擎
//!
//! 管理员、教师、学生共享同一份目录数据；教师只能读写自己被分配的
//! (班级, 分班, 科目) 三元组对应的考勤与成绩。
//!
//! # 架构
//! - `config`: 配置管理
//! - `directory`: 班级、科目、学生、教师等参考数据与管理员编辑
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（分配解析、访问守卫、考勤、成绩等）
//! - `session`: 会话快照的键值存储
//! - `storage`: 记录存储层（插件注册 + 内存实现）
//! - `utils`: 工具函数

pub mod config;
pub mod directory;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;
