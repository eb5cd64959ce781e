//! `Context`：会话内唯一的可变状态。
//!
//! 约定：
//! - `query`：用户输入的原始查询词（原样保存，过滤时才 trim）
//! - `selected`：当前选择的记录
//! - 两者互不影响；只有 `reset` 会同时改写两者
use crate::model::CountryRecord;

/// 列表会话上下文。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// 查询词（未 trim）
    pub query: String,
    /// 当前选择
    pub selected: Option<CountryRecord>,
}

impl Context {
    /// 以给定的初始选择创建上下文。
    pub fn with_selected(selected: Option<CountryRecord>) -> Self {
        Self {
            query: String::new(),
            selected,
        }
    }

    /// 清空查询词，并把选择恢复为 `default`。
    pub fn reset(&mut self, default: Option<CountryRecord>) {
        self.query.clear();
        self.selected = default;
    }
}
