//! `filter`：按查询词过滤基础列表，并按相关度重排。
//!
//! 匹配（任一成立即保留）：
//! - 代码以查询词开头（忽略大小写）
//! - 英文名包含查询词（忽略大小写）
//! - 中文名包含查询词（原样比较）
//!
//! 排序：精确代码 > 代码前缀 > 英文名前缀 > 其他；同级保持基础列表顺序。

use std::cmp::Reverse;

use crate::model::{CountryRecord, ListItem};

/// Filter：对列表做后处理（过滤、重排等）。
pub trait Filter: Send + Sync {
    fn apply(&self, items: Vec<ListItem>) -> Vec<ListItem>;
}

/// 预处理后的查询词：只 trim/小写一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// trim 后的原文（用于中文名匹配）
    pub trimmed: String,
    /// trim + 小写（用于代码/英文名匹配）
    pub lower: String,
}

impl PreparedQuery {
    /// trim 后为空时返回 `None`（表示不过滤）。
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            trimmed: trimmed.to_owned(),
            lower: trimmed.to_lowercase(),
        })
    }

    /// 不匹配返回 `None`，否则返回相关度。
    pub fn relevance(&self, record: &CountryRecord) -> Option<Relevance> {
        let code = record.code.to_lowercase();
        let name_en = record.name_en.to_lowercase();

        let code_prefix = code.starts_with(&self.lower);
        let matched = code_prefix
            || name_en.contains(&self.lower)
            || record.name_zh.contains(&self.trimmed);
        if !matched {
            return None;
        }
        Some(Relevance {
            exact_code: Reverse(code == self.lower),
            code_prefix: Reverse(code_prefix),
            name_prefix: Reverse(name_en.starts_with(&self.lower)),
        })
    }
}

/// 相关度：字段顺序即比较优先级，越小越靠前。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Relevance {
    exact_code: Reverse<bool>,
    code_prefix: Reverse<bool>,
    name_prefix: Reverse<bool>,
}

impl Relevance {
    pub fn is_exact_code(&self) -> bool {
        self.exact_code.0
    }

    pub fn is_code_prefix(&self) -> bool {
        self.code_prefix.0
    }

    pub fn is_name_prefix(&self) -> bool {
        self.name_prefix.0
    }
}

/// 默认 filter：按查询词过滤并稳定排序。
pub struct QueryFilter<'a> {
    pub query: &'a str,
}

impl Filter for QueryFilter<'_> {
    fn apply(&self, items: Vec<ListItem>) -> Vec<ListItem> {
        let Some(query) = PreparedQuery::new(self.query) else {
            return items;
        };
        let mut ranked: Vec<(Relevance, ListItem)> = items
            .into_iter()
            .filter_map(|item| query.relevance(&item).map(|rel| (rel, item)))
            .collect();
        ranked.sort_by_key(|(rel, _)| *rel);
        ranked.into_iter().map(|(_, item)| item).collect()
    }
}
