use tracing::{debug, trace};

use crate::builder::BaseListBuilder;
use crate::collation::Collator;
use crate::dataset::Dataset;
use crate::filter::{Filter, QueryFilter};
use crate::model::{CountryRecord, ListItem, Selection};
use crate::options::ListOptions;

/// 引擎：负责把（数据集, 配置, 查询词）推导成最终列表。
///
/// 结构上对应流水线：
/// - builder（白名单/置顶/排序） -> filter（查询过滤/相关度排序） -> 输出 `Vec<ListItem>`
///
/// 引擎本身无状态；查询词与选择由 `Session` 持有。
pub struct Engine<D, C> {
    /// 数据集（内置表或调用方提供）
    dataset: D,
    /// 非置顶项的比较器
    collator: C,
}

impl<D, C> Engine<D, C>
where
    D: Dataset,
    C: Collator,
{
    pub fn new(dataset: D, collator: C) -> Self {
        Self { dataset, collator }
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    /// 基础列表：只依赖 `include_only/top_list/sort_by`。
    pub fn base_list(&self, options: &ListOptions) -> Vec<ListItem> {
        let items = BaseListBuilder {
            collator: &self.collator,
            options,
        }
        .build(self.dataset.records());
        debug!(
            count = items.len(),
            pinned = items.iter().filter(|i| i.is_top).count(),
            sort_by = %options.sort_by,
            "base list built"
        );
        items
    }

    /// 对（已构建的）基础列表应用查询词。
    pub fn filter(&self, base: Vec<ListItem>, query: &str) -> Vec<ListItem> {
        let out = QueryFilter { query }.apply(base);
        trace!(query, matched = out.len(), "query applied");
        out
    }

    /// 一步到位：base_list + filter。
    pub fn derive(&self, options: &ListOptions, query: &str) -> Vec<ListItem> {
        self.filter(self.base_list(options), query)
    }

    /// 把选择输入解析为记录；代码查不到时返回 `None`（不报错）。
    pub fn resolve(&self, selection: impl Into<Selection>) -> Option<CountryRecord> {
        match selection.into() {
            Selection::Code(code) => {
                let found = self.dataset.get(&code).cloned();
                if found.is_none() {
                    debug!(%code, "selection code not found in dataset");
                }
                found
            }
            Selection::Record(record) => Some(record),
            Selection::Clear => None,
        }
    }

    /// 解析 `default_selected`；缺省或无效时为 `None`。
    pub fn resolve_default(&self, options: &ListOptions) -> Option<CountryRecord> {
        options
            .default_selected
            .as_deref()
            .and_then(|code| self.resolve(code))
    }
}
