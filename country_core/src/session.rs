//! `Session`：对上层（下拉框/自动补全/CLI）提供的会话对象。
//!
//! `Session` 自身不做排序/过滤判断，而是：
//! - 持有 `Engine`（数据集 + 比较器）与 `ListOptions`
//! - 持有 `Context`（查询词 + 选择）
//! - 缓存基础列表（只在配置变化时重建）
//! - 对外暴露 `{ query, set_query, selected, set_selected, reset }`

use tracing::debug;

use crate::{
    collation::Collator,
    context::Context,
    dataset::Dataset,
    engine::Engine,
    event::ListEvent,
    model::{self, CountryRecord, ListItem, ListState, Selection},
    options::ListOptions,
};

/// 列表会话（一次选择过程的状态容器）。
pub struct Session<D, C> {
    engine: Engine<D, C>,
    options: ListOptions,
    ctx: Context,
    /// 与 `options` 对应的基础列表
    base: Vec<ListItem>,
}

impl<D, C> Session<D, C>
where
    D: Dataset,
    C: Collator,
{
    /// 创建会话；`default_selected` 能解析时作为初始选择。
    pub fn new(engine: Engine<D, C>, options: ListOptions) -> Self {
        let base = engine.base_list(&options);
        let ctx = Context::with_selected(engine.resolve_default(&options));
        Self {
            engine,
            options,
            ctx,
            base,
        }
    }

    pub fn engine(&self) -> &Engine<D, C> {
        &self.engine
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// 替换配置。查询词与选择保持不变；`default_selected` 只影响之后的 `reset`。
    pub fn set_options(&mut self, options: ListOptions) {
        if !options.same_base(&self.options) {
            self.base = self.engine.base_list(&options);
        }
        self.options = options;
    }

    pub fn query(&self) -> &str {
        &self.ctx.query
    }

    /// 原样保存查询词（不 trim）。
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.ctx.query = query.into();
    }

    pub fn selected(&self) -> Option<&CountryRecord> {
        self.ctx.selected.as_ref()
    }

    /// 修改选择：代码查不到时选择变为空。
    pub fn set_selected(&mut self, selection: impl Into<Selection>) {
        self.ctx.selected = self.engine.resolve(selection);
    }

    /// 清空查询词，并重新解析 `default_selected` 作为选择。
    pub fn reset(&mut self) {
        let default = self.engine.resolve_default(&self.options);
        debug!(
            default = default.as_ref().map(|r| r.code.as_str()),
            "session reset"
        );
        self.ctx.reset(default);
    }

    /// 当前查询词下的列表。
    pub fn items(&self) -> Vec<ListItem> {
        self.engine.filter(self.base.clone(), &self.ctx.query)
    }

    /// 按 `show_flag` 生成展示文本。
    pub fn display_text(&self, record: &CountryRecord) -> String {
        model::display_text(record, self.options.show_flag)
    }

    /// 生成 UI 层只读快照。
    pub fn ui_state(&self) -> ListState {
        ListState {
            query: self.ctx.query.clone(),
            selected: self.ctx.selected.clone(),
            items: self.items(),
        }
    }

    /// 处理一个事件，返回最新快照。
    pub fn handle(&mut self, event: ListEvent) -> ListState {
        match event {
            ListEvent::SetQuery(query) => self.set_query(query),
            ListEvent::Select(selection) => self.set_selected(selection),
            ListEvent::Reset => self.reset(),
        }
        self.ui_state()
    }
}
