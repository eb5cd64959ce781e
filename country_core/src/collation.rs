//! `collation`：非置顶项的排序比较器。
//!
//! core 只定义接口；带笔画/注音表的实现在 `country_collate`。

use std::cmp::Ordering;

use crate::{model::CountryRecord, options::SortBy};

/// Collator：按 `SortBy` 比较两条记录。
///
/// 实现必须是全序（排序依赖它），且只看 `SortBy` 对应的名称字段。
pub trait Collator: Send + Sync {
    fn compare(&self, sort_by: SortBy, a: &CountryRecord, b: &CountryRecord) -> Ordering;
}

impl<T> Collator for &T
where
    T: Collator + ?Sized,
{
    fn compare(&self, sort_by: SortBy, a: &CountryRecord, b: &CountryRecord) -> Ordering {
        (**self).compare(sort_by, a, b)
    }
}

/// 按码位比较：`En` 比 `name_en`，`Zh`/`Zhuyin` 比 `name_zh`。
///
/// 不带任何语言表，结果稳定，适合测试或不需要本地化排序的场景。
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointCollator;

impl Collator for CodepointCollator {
    fn compare(&self, sort_by: SortBy, a: &CountryRecord, b: &CountryRecord) -> Ordering {
        match sort_by {
            SortBy::En => a.name_en.cmp(&b.name_en),
            SortBy::Zh | SortBy::Zhuyin => a.name_zh.cmp(&b.name_zh),
        }
    }
}
