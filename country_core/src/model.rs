use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// 国家/地区记录（静态数据集中的一行，只读）。
///
/// 约定：`code` 在数据集中唯一，是选择/置顶/白名单的外键。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 代码（大写，例如 `"TW"`）
    pub code: String,
    /// 中文名称（例如 `"台灣"`）
    pub name_zh: String,
    /// 英文名称（例如 `"Taiwan"`）
    pub name_en: String,
    /// 旗帜 emoji
    pub flag: String,
}

impl CountryRecord {
    pub fn new(
        code: impl Into<String>,
        name_zh: impl Into<String>,
        name_en: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name_zh: name_zh.into(),
            name_en: name_en.into(),
            flag: flag.into(),
        }
    }
}

/// 列表项：记录 + 是否置顶。每次推导重新生成，不持久化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    #[serde(flatten)]
    pub record: CountryRecord,
    /// 代码出现在 `top_list` 中时为 true
    pub is_top: bool,
}

impl ListItem {
    pub fn top(record: CountryRecord) -> Self {
        Self { record, is_top: true }
    }

    pub fn regular(record: CountryRecord) -> Self {
        Self {
            record,
            is_top: false,
        }
    }
}

impl Deref for ListItem {
    type Target = CountryRecord;

    fn deref(&self) -> &CountryRecord {
        &self.record
    }
}

/// 选择输入：代码 / 记录本身 / 清空。
///
/// - `Code`：按数据集查找；查不到时选择变为空（静默，不报错）
/// - `Record`：原样保存，不校验是否在数据集中
/// - `Clear`：清空选择
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Code(String),
    Record(CountryRecord),
    Clear,
}

impl From<&str> for Selection {
    fn from(code: &str) -> Self {
        Selection::Code(code.to_owned())
    }
}

impl From<String> for Selection {
    fn from(code: String) -> Self {
        Selection::Code(code)
    }
}

impl From<CountryRecord> for Selection {
    fn from(record: CountryRecord) -> Self {
        Selection::Record(record)
    }
}

impl From<&CountryRecord> for Selection {
    fn from(record: &CountryRecord) -> Self {
        Selection::Record(record.clone())
    }
}

impl From<&ListItem> for Selection {
    fn from(item: &ListItem) -> Self {
        Selection::Record(item.record.clone())
    }
}

impl<T> From<Option<T>> for Selection
where
    T: Into<Selection>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::Clear, Into::into)
    }
}

/// 给 UI 层的“快照视图”：只读，不直接读写 `Context`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListState {
    /// 当前查询（原样保存，未 trim）
    pub query: String,
    /// 当前选择
    pub selected: Option<CountryRecord>,
    /// 过滤 + 排序后的列表
    pub items: Vec<ListItem>,
}

/// 展示文本：`show_flag` 为 true 时是 `"{flag} {name_zh}"`，否则只有中文名。
pub fn display_text(record: &CountryRecord, show_flag: bool) -> String {
    if show_flag {
        format!("{} {}", record.flag, record.name_zh)
    } else {
        record.name_zh.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taiwan() -> CountryRecord {
        CountryRecord::new("TW", "台灣", "Taiwan", "🇹🇼")
    }

    #[test]
    fn display_text_follows_show_flag() {
        assert_eq!(display_text(&taiwan(), true), "🇹🇼 台灣");
        assert_eq!(display_text(&taiwan(), false), "台灣");
    }

    #[test]
    fn selection_conversions() {
        assert_eq!(Selection::from("JP"), Selection::Code("JP".into()));
        assert_eq!(Selection::from(taiwan()), Selection::Record(taiwan()));
        assert_eq!(Selection::from(None::<&str>), Selection::Clear);
        assert_eq!(Selection::from(Some("US")), Selection::Code("US".into()));
    }

    #[test]
    fn list_item_serializes_flat() {
        let json = serde_json::to_value(ListItem::top(taiwan())).unwrap();
        assert_eq!(json["code"], "TW");
        assert_eq!(json["nameZh"], "台灣");
        assert_eq!(json["nameEn"], "Taiwan");
        assert_eq!(json["isTop"], true);
    }
}
