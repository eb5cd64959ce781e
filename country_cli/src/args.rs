use std::path::PathBuf;

use clap::Parser;

/// 命令行参数；与配置文件同名的选项会覆盖配置文件。
#[derive(Parser, Debug, Default)]
#[command(name = "country-list", version, about = "国家/地区列表：过滤、排序与选择")]
pub struct Args {
    /// TOML 配置文件
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// 排序方式：zh（笔画）/ en（字母）/ zhuyin（注音）；未知值按 zh 处理
    #[arg(short = 's', long)]
    pub sort: Option<String>,

    /// 置顶代码，逗号分隔，按给定顺序
    #[arg(long, value_delimiter = ',')]
    pub top: Option<Vec<String>>,

    /// 白名单代码，逗号分隔
    #[arg(long, value_delimiter = ',')]
    pub include: Option<Vec<String>>,

    /// 默认选中的代码
    #[arg(long = "default")]
    pub default_selected: Option<String>,

    /// 显示文本不带旗帜
    #[arg(long)]
    pub no_flag: bool,

    /// 自定义数据集（TSV：code, nameZh, nameEn[, flag]）
    #[arg(short = 'd', long)]
    pub dataset: Option<PathBuf>,

    /// 单次查询：输出结果后退出
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// 单次查询以 JSON 输出
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_flags() {
        let args = Args::try_parse_from([
            "country-list",
            "--sort",
            "en",
            "--top",
            "TW,US",
            "--include",
            "TW,US,JP",
            "--default",
            "JP",
            "--no-flag",
        ])
        .unwrap();
        assert_eq!(args.sort.as_deref(), Some("en"));
        assert_eq!(args.top, Some(vec!["TW".to_owned(), "US".to_owned()]));
        assert_eq!(args.include.map(|v| v.len()), Some(3));
        assert_eq!(args.default_selected.as_deref(), Some("JP"));
        assert!(args.no_flag);
        assert!(!args.json);
    }

    #[test]
    fn defaults_are_empty() {
        let args = Args::try_parse_from(["country-list"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.top.is_none());
        assert!(args.query.is_none());
        assert!(!args.no_flag);
    }

    #[test]
    fn one_shot_query() {
        let args = Args::try_parse_from(["country-list", "-q", "new", "--json"]).unwrap();
        assert_eq!(args.query.as_deref(), Some("new"));
        assert!(args.json);
    }
}
