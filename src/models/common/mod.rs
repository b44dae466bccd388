pub mod selection;

pub use selection::Selection;

/// 班级编号（1 到 10 年级）
pub type ClassNumber = u8;

/// 悬空引用的占位显示文本
pub const UNKNOWN_SUBJECT: &str = "Unknown Subject";
pub const UNKNOWN_EXAM: &str = "Unknown Exam";
pub const UNKNOWN_STUDENT: &str = "Unknown Student";
pub const UNKNOWN_TEACHER: &str = "Unknown Teacher";
