//! 数据模型定义
//!
//! 每个领域按 entities / requests / responses 划分。

pub mod attendance;
pub mod auth;
pub mod classes;
pub mod common;
pub mod content;
pub mod dashboard;
pub mod events;
pub mod exams;
pub mod results;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::{ClassNumber, Selection};
