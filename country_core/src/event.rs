use crate::model::Selection;

/// 列表事件（UI 层的语义操作）。
///
/// 说明：
/// - `Session` 只关心语义事件，不关心具体控件（下拉框/自动补全/命令行）
/// - 适配层负责把控件回调转换成这些事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// 替换查询词（原样保存）
    SetQuery(String),
    /// 修改选择（代码/记录/清空）
    Select(Selection),
    /// 清空查询词并恢复默认选择
    Reset,
}
