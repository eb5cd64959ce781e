use std::io;

/// 数据集加载错误。`line` 从 1 开始（`from_records` 时是条目序号）。
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("读取数据集失败: {0}")]
    Io(#[from] io::Error),

    #[error("第 {line} 行缺少字段 `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("第 {line} 行代码 `{code}` 无效（应为两个大写字母）")]
    InvalidCode { line: usize, code: String },

    #[error("第 {line} 行代码 `{code}` 重复")]
    DuplicateCode { line: usize, code: String },
}

impl DatasetError {
    /// 出错位置（I/O 错误没有行号）。
    pub fn line(&self) -> Option<usize> {
        match self {
            DatasetError::Io(_) => None,
            DatasetError::MissingField { line, .. }
            | DatasetError::InvalidCode { line, .. }
            | DatasetError::DuplicateCode { line, .. } => Some(*line),
        }
    }
}
