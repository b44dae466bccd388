use serde::{Deserialize, Serialize};

/// 查询/下拉框的选择值
///
/// `All` 表示不施加约束，`One` 表示精确匹配。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    #[default]
    All,
    One(T),
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_one(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::One(value) => Some(value),
        }
    }

    pub fn as_ref(&self) -> Selection<&T> {
        match self {
            Selection::All => Selection::All,
            Selection::One(value) => Selection::One(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Selection<U> {
        match self {
            Selection::All => Selection::All,
            Selection::One(value) => Selection::One(f(value)),
        }
    }
}

impl<T: PartialEq> Selection<T> {
    /// `All` 匹配任意值，`One(v)` 仅匹配相等的值
    pub fn matches(&self, candidate: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::One(value) => value == candidate,
        }
    }
}

impl Selection<String> {
    /// 与 `&str` 比较，避免调用方为匹配而分配
    pub fn matches_str(&self, candidate: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::One(value) => value == candidate,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::One(v),
            None => Selection::All,
        }
    }
}

impl From<&str> for Selection<String> {
    fn from(value: &str) -> Self {
        Selection::One(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        let sel: Selection<u8> = Selection::All;
        assert!(sel.matches(&1));
        assert!(sel.matches(&10));
        assert!(sel.is_all());
    }

    #[test]
    fn test_one_is_exact() {
        let sel = Selection::One("math_pri".to_string());
        assert!(sel.matches_str("math_pri"));
        assert!(!sel.matches_str("math_mid"));
        assert_eq!(sel.as_one().map(String::as_str), Some("math_pri"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Selection::from(Some(5u8)), Selection::One(5));
        assert_eq!(Selection::<u8>::from(None), Selection::All);
    }
}
