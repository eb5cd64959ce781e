use crate::model::CountryRecord;

/// 数据集抽象：core 不关心记录来自内置表/TSV/其他来源。
///
/// 约定：
/// - `records()` 顺序即数据集原始顺序，只读
/// - `get(code)` 精确匹配（区分大小写）；查不到返回 `None`
pub trait Dataset: Send + Sync {
    fn records(&self) -> &[CountryRecord];

    /// 按代码查找（默认线性扫描；实现方可以提供索引）。
    fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.records().iter().find(|r| r.code == code)
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl Dataset for [CountryRecord] {
    fn records(&self) -> &[CountryRecord] {
        self
    }
}

impl Dataset for Vec<CountryRecord> {
    fn records(&self) -> &[CountryRecord] {
        self
    }
}

impl<T> Dataset for &T
where
    T: Dataset + ?Sized,
{
    fn records(&self) -> &[CountryRecord] {
        (**self).records()
    }

    fn get(&self, code: &str) -> Option<&CountryRecord> {
        (**self).get(code)
    }
}
