//! 本地化排序：英文字母序、中文笔画序、注音序。
//!
//! 中文两种排序不依赖系统 ICU，而是随 crate 附带一张预先整理的汉字表（见 `han`）。

use std::cmp::Ordering;

use country_core::{Collator, CountryRecord, SortBy};

pub mod english;
pub mod han;

pub use han::HanInfo;

/// 默认比较器：按 `SortBy` 选择规则。
///
/// - `En`：`name_en` 英文字母序
/// - `Zh`：`name_zh` 笔画序
/// - `Zhuyin`：`name_zh` 注音序
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleCollator;

impl LocaleCollator {
    pub fn new() -> Self {
        Self
    }

    /// 直接比较两个字符串（不需要构造记录）。
    pub fn compare_str(&self, sort_by: SortBy, a: &str, b: &str) -> Ordering {
        match sort_by {
            SortBy::En => english::compare(a, b),
            SortBy::Zh => han::compare_strokes(a, b),
            SortBy::Zhuyin => han::compare_zhuyin(a, b),
        }
    }
}

impl Collator for LocaleCollator {
    fn compare(&self, sort_by: SortBy, a: &CountryRecord, b: &CountryRecord) -> Ordering {
        match sort_by {
            SortBy::En => self.compare_str(sort_by, &a.name_en, &b.name_en),
            SortBy::Zh | SortBy::Zhuyin => self.compare_str(sort_by, &a.name_zh, &b.name_zh),
        }
    }
}
