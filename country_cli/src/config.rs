//! 配置：TOML 文件 + 命令行覆盖。
//!
//! 约定：
//! - 文件字段与 `ListOptions` 的序列化名一致（`showFlag`、`topList` 等），另可写 `dataset`
//! - 缺省字段取默认值；未知 `sortBy` 按 `zh` 处理
//! - 命令行给出的选项覆盖文件中的同名项

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use country_core::{ListOptions, SortBy};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::args::Args;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("读取配置文件 {path} 失败: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("解析配置文件 {path} 失败: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// 自定义数据集路径；相对路径以配置文件所在目录为基准
    pub dataset: Option<PathBuf>,
    #[serde(flatten)]
    pub options: ListOptions,
}

impl Config {
    pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        if let (Some(ds), Some(dir)) = (&config.dataset, path.parent()) {
            if ds.is_relative() {
                config.dataset = Some(dir.join(ds));
            }
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml_str(&s, path)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// 用命令行参数覆盖。
    pub fn apply(mut self, args: &Args) -> Self {
        let mut options = self.options;
        if let Some(sort) = &args.sort {
            let sort_by = SortBy::parse_lossy(sort);
            if !sort_by.as_str().eq_ignore_ascii_case(sort.trim()) {
                warn!(value = %sort, "unknown sort, falling back to {sort_by}");
            }
            options = options.sort_by(sort_by);
        }
        if let Some(top) = &args.top {
            options = options.top_list(top.iter().cloned());
        }
        if let Some(include) = &args.include {
            options = options.include_only(include.iter().cloned());
        }
        if let Some(code) = &args.default_selected {
            options = options.default_selected(code.clone());
        }
        if args.no_flag {
            options = options.show_flag(false);
        }
        if let Some(ds) = &args.dataset {
            self.dataset = Some(ds.clone());
        }
        self.options = options;
        self
    }
}

/// 读取（可选的）配置文件并应用命令行覆盖。
pub fn resolve(args: &Args) -> Result<Config, ConfigError> {
    let base = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Ok(base.apply(args))
}
