//! `options`：列表配置（调用方提供，单次推导内不可变）。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 非置顶项的排序方式。
///
/// 边界上接受任意字符串时，未知值一律回退到 `Zh`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortBy {
    /// 中文笔画顺序
    #[default]
    Zh,
    /// 英文字母顺序
    En,
    /// 注音符号顺序
    Zhuyin,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Zh, SortBy::En, SortBy::Zhuyin];

    /// 宽松解析：忽略大小写与首尾空白，无法识别时回退到 `Zh`。
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => SortBy::En,
            "zhuyin" => SortBy::Zhuyin,
            _ => SortBy::Zh,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Zh => "zh",
            SortBy::En => "en",
            SortBy::Zhuyin => "zhuyin",
        }
    }
}

impl FromStr for SortBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortBy::parse_lossy(s))
    }
}

impl From<String> for SortBy {
    fn from(s: String) -> Self {
        SortBy::parse_lossy(&s)
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 列表配置。
///
/// - `top_list`：既决定哪些项置顶，也决定置顶项的顺序
/// - `include_only`：`None` 不限制；`Some(vec![])` 结果为空
/// - `default_selected`：初始选择，也是 `reset` 的恢复目标
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListOptions {
    pub show_flag: bool,
    pub top_list: Vec<String>,
    pub include_only: Option<Vec<String>>,
    pub default_selected: Option<String>,
    pub sort_by: SortBy,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            show_flag: true,
            top_list: Vec::new(),
            include_only: None,
            default_selected: None,
            sort_by: SortBy::Zh,
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_flag(mut self, show: bool) -> Self {
        self.show_flag = show;
        self
    }

    pub fn top_list<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.top_list = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn include_only<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_only = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn default_selected(mut self, code: impl Into<String>) -> Self {
        self.default_selected = Some(code.into());
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// 影响基础列表的三个字段相同（可复用缓存的基础列表）。
    pub fn same_base(&self, other: &ListOptions) -> bool {
        self.include_only == other.include_only
            && self.top_list == other.top_list
            && self.sort_by == other.sort_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = ListOptions::default();
        assert!(o.show_flag);
        assert!(o.top_list.is_empty());
        assert_eq!(o.include_only, None);
        assert_eq!(o.default_selected, None);
        assert_eq!(o.sort_by, SortBy::Zh);
    }

    #[test]
    fn unknown_sort_falls_back_to_zh() {
        assert_eq!(SortBy::parse_lossy(" EN "), SortBy::En);
        assert_eq!(SortBy::parse_lossy("zhuyin"), SortBy::Zhuyin);
        assert_eq!(SortBy::parse_lossy("pinyin"), SortBy::Zh);
        assert_eq!("".parse::<SortBy>(), Ok(SortBy::Zh));
    }

    #[test]
    fn deserialize_partial_json() {
        let o: ListOptions =
            serde_json::from_str(r#"{"topList":["TW","JP"],"sortBy":"klingon"}"#).unwrap();
        assert!(o.show_flag);
        assert_eq!(o.top_list, vec!["TW", "JP"]);
        assert_eq!(o.sort_by, SortBy::Zh);

        let o: ListOptions = serde_json::from_str(r#"{"includeOnly":[],"sortBy":"en"}"#).unwrap();
        assert_eq!(o.include_only, Some(Vec::new()));
        assert_eq!(o.sort_by, SortBy::En);
    }

    #[test]
    fn same_base_ignores_display_fields() {
        let a = ListOptions::new().top_list(["TW"]);
        let b = a.clone().show_flag(false).default_selected("JP");
        assert!(a.same_base(&b));
        assert!(!a.same_base(&b.sort_by(SortBy::En)));
    }
}
