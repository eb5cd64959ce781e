//! `builder`：把数据集变成基础列表（白名单 -> 置顶/普通分区 -> 排序 -> 拼接）。

use std::collections::{HashMap, HashSet};

use crate::{
    collation::Collator,
    model::{CountryRecord, ListItem},
    options::ListOptions,
};

/// 基础列表构建器。纯函数：相同输入永远得到相同输出。
pub struct BaseListBuilder<'a, C> {
    /// 普通项的比较器
    pub collator: &'a C,
    /// 只用到 `include_only/top_list/sort_by`
    pub options: &'a ListOptions,
}

impl<'a, C> BaseListBuilder<'a, C>
where
    C: Collator,
{
    pub fn build(&self, records: &[CountryRecord]) -> Vec<ListItem> {
        let whitelist: Option<HashSet<&str>> = self
            .options
            .include_only
            .as_ref()
            .map(|codes| codes.iter().map(String::as_str).collect());

        // 同一代码在 top_list 中重复出现时，以第一次出现的位置为准。
        let mut top_rank: HashMap<&str, usize> = HashMap::new();
        for (i, code) in self.options.top_list.iter().enumerate() {
            top_rank.entry(code.as_str()).or_insert(i);
        }

        let mut pinned: Vec<(usize, &CountryRecord)> = Vec::new();
        let mut regular: Vec<&CountryRecord> = Vec::new();
        for record in records {
            if let Some(allowed) = &whitelist {
                if !allowed.contains(record.code.as_str()) {
                    continue;
                }
            }
            match top_rank.get(record.code.as_str()) {
                Some(&rank) => pinned.push((rank, record)),
                None => regular.push(record),
            }
        }

        pinned.sort_by_key(|(rank, _)| *rank);
        let sort_by = self.options.sort_by;
        regular.sort_by(|a, b| self.collator.compare(sort_by, a, b));

        let mut out = Vec::with_capacity(pinned.len() + regular.len());
        out.extend(pinned.into_iter().map(|(_, r)| ListItem::top(r.clone())));
        out.extend(regular.into_iter().map(|r| ListItem::regular(r.clone())));
        out
    }
}
