//! 国家数据集：内置表 + TSV 加载，以及接好默认比较器的便捷入口。

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
    sync::LazyLock,
};

use country_collate::LocaleCollator;
use country_core::{CountryRecord, Dataset, Engine, ListItem, ListOptions, Selection, Session};
use tracing::debug;

mod error;
mod table;

pub use error::DatasetError;

/// 数据集：记录按加载顺序保存，另建 代码 -> 下标 索引。
#[derive(Debug, Clone, Default)]
pub struct Countries {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

static BUILTIN: LazyLock<Countries> = LazyLock::new(|| {
    let records = table::COUNTRIES
        .iter()
        .map(|&(code, name_zh, name_en, flag)| CountryRecord::new(code, name_zh, name_en, flag))
        .collect();
    Countries::indexed(records)
});

impl Countries {
    /// 进程级只读内置数据集（首次访问时初始化）。
    pub fn builtin() -> &'static Countries {
        &BUILTIN
    }

    /// 校验后建立数据集：代码必须是两个大写 ASCII 字母且不重复。
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self, DatasetError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            let line = i + 1;
            if !is_valid_code(&r.code) {
                return Err(DatasetError::InvalidCode {
                    line,
                    code: r.code.clone(),
                });
            }
            if !seen.insert(r.code.as_str()) {
                return Err(DatasetError::DuplicateCode {
                    line,
                    code: r.code.clone(),
                });
            }
        }
        Ok(Self::indexed(records))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let s = fs::read_to_string(path)?;
        Self::from_tsv_str(&s)
    }

    /// TSV 格式：
    ///
    /// - `code<TAB>nameZh<TAB>nameEn[<TAB>flag]`
    /// - flag 可省略，默认由代码生成（区域指示符号）
    /// - 允许 `#` 开头注释行与空行
    pub fn from_tsv_str(s: &str) -> Result<Self, DatasetError> {
        let mut records = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (idx, line) in s.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut it = trimmed.split('\t').map(str::trim);
            let code = it.next().unwrap_or("");
            let name_zh = it.next().unwrap_or("");
            let name_en = it.next().unwrap_or("");
            let flag = it.next().filter(|f| !f.is_empty());

            for (value, field) in [(code, "code"), (name_zh, "nameZh"), (name_en, "nameEn")] {
                if value.is_empty() {
                    return Err(DatasetError::MissingField {
                        line: line_no,
                        field,
                    });
                }
            }
            if !is_valid_code(code) {
                return Err(DatasetError::InvalidCode {
                    line: line_no,
                    code: code.to_owned(),
                });
            }
            if !seen.insert(code.to_owned()) {
                return Err(DatasetError::DuplicateCode {
                    line: line_no,
                    code: code.to_owned(),
                });
            }

            let flag = match flag {
                Some(f) => f.to_owned(),
                None => flag_emoji(code).unwrap_or_default(),
            };
            records.push(CountryRecord::new(code, name_zh, name_en, flag));
        }

        debug!(count = records.len(), "dataset loaded from tsv");
        Ok(Self::indexed(records))
    }

    fn indexed(records: Vec<CountryRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            index.entry(r.code.clone()).or_insert(i);
        }
        Self { records, index }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }
}

impl Dataset for Countries {
    fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.index.get(code).map(|&i| &self.records[i])
    }
}

impl<'a> IntoIterator for &'a Countries {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn is_valid_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// 由两位代码生成旗帜 emoji（区域指示符号）；代码无效时返回 `None`。
pub fn flag_emoji(code: &str) -> Option<String> {
    if !is_valid_code(code) {
        return None;
    }
    code.bytes()
        .map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
        .collect()
}

/// 内置数据集的全部记录（原始顺序）。
pub fn countries() -> &'static [CountryRecord] {
    Countries::builtin().records()
}

/// 内置数据集 + 本地化比较器。
pub type CountryList = Session<&'static Countries, LocaleCollator>;

pub fn engine() -> Engine<&'static Countries, LocaleCollator> {
    Engine::new(Countries::builtin(), LocaleCollator)
}

/// 基于内置数据集创建会话。
pub fn country_list(options: ListOptions) -> CountryList {
    Session::new(engine(), options)
}

/// 基于内置数据集推导列表（无状态）。
pub fn derive(options: &ListOptions, query: &str) -> Vec<ListItem> {
    engine().derive(options, query)
}

/// 基于内置数据集解析选择输入。
pub fn resolve(selection: impl Into<Selection>) -> Option<CountryRecord> {
    engine().resolve(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_complete_and_indexed() {
        let c = Countries::builtin();
        assert_eq!(c.len(), 249);
        assert_eq!(c.get("TW").map(|r| r.name_zh.as_str()), Some("台灣"));
        assert_eq!(c.get("tw"), None);
        assert!(c.iter().all(|r| is_valid_code(&r.code)));
    }

    #[test]
    fn builtin_flags_match_codes() {
        for r in Countries::builtin() {
            assert_eq!(flag_emoji(&r.code).as_deref(), Some(r.flag.as_str()), "{}", r.code);
        }
    }

    #[test]
    fn flag_emoji_rejects_bad_codes() {
        assert_eq!(flag_emoji("TW").as_deref(), Some("🇹🇼"));
        assert_eq!(flag_emoji("tw"), None);
        assert_eq!(flag_emoji("TWN"), None);
    }

    #[test]
    fn from_records_validates() {
        let ok = Countries::from_records(vec![CountryRecord::new("TW", "台灣", "Taiwan", "")]);
        assert_eq!(ok.unwrap().len(), 1);

        let dup = Countries::from_records(vec![
            CountryRecord::new("TW", "台灣", "Taiwan", ""),
            CountryRecord::new("TW", "臺灣", "Taiwan", ""),
        ]);
        assert!(matches!(dup, Err(DatasetError::DuplicateCode { line: 2, .. })));

        let bad = Countries::from_records(vec![CountryRecord::new("T1", "?", "?", "")]);
        assert!(matches!(bad, Err(DatasetError::InvalidCode { line: 1, .. })));
    }
}
