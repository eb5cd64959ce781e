use std::io::{self, BufRead, Write};

use anyhow::Context as _;
use clap::Parser;
use country_collate::LocaleCollator;
use country_core::{Dataset, Engine, ListEvent, ListItem, ListState, Selection, Session};
use country_data::Countries;
use tracing::info;

mod args;
mod config;
mod logging;

use args::Args;

type List = Session<Countries, LocaleCollator>;

/// 交互模式每次最多显示的条目数。
const PAGE: usize = 20;

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();
    let config = config::resolve(&args)?;

    let dataset = match &config.dataset {
        Some(path) => Countries::from_path(path)
            .with_context(|| format!("加载数据集 {} 失败", path.display()))?,
        None => Countries::builtin().clone(),
    };
    info!(count = dataset.len(), sort_by = %config.options.sort_by, "dataset ready");

    let mut list = Session::new(Engine::new(dataset, LocaleCollator), config.options);
    let mut out = io::stdout().lock();

    if let Some(query) = &args.query {
        let state = list.handle(ListEvent::SetQuery(query.clone()));
        if args.json {
            serde_json::to_writer_pretty(&mut out, &state)?;
            writeln!(out)?;
        } else {
            print_items(&mut out, &list, &state.items, usize::MAX)?;
        }
        return Ok(());
    }

    repl(&mut list, io::stdin().lock(), &mut out)?;
    Ok(())
}

/// 交互命令；其余输入一律视为新的查询词。
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Select(String),
    Clear,
    Reset,
    Query(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let cmd = line.trim();
        match cmd {
            ":q" | ":quit" | ":exit" => Command::Quit,
            ":clear" => Command::Clear,
            ":reset" => Command::Reset,
            _ => match cmd.strip_prefix(":select") {
                Some(code) if code.is_empty() || code.starts_with(' ') => {
                    Command::Select(code.trim().to_owned())
                }
                _ => Command::Query(line.to_owned()),
            },
        }
    }
}

fn repl(list: &mut List, mut input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "country-list | {} 条 | 排序: {}",
        list.engine().dataset().len(),
        list.options().sort_by
    )?;
    writeln!(out, "输入查询词回车过滤；:select CODE 选择，:clear 取消选择，:reset 重置，:q 退出。")?;
    print_state(out, list, &list.ui_state())?;

    let mut line = String::new();
    loop {
        line.clear();
        write!(out, "query> ")?;
        out.flush()?;
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let event = match Command::parse(&line) {
            Command::Quit => break,
            Command::Select(code) if code.is_empty() => {
                writeln!(out, "用法：:select CODE")?;
                continue;
            }
            Command::Select(code) => ListEvent::Select(Selection::Code(code)),
            Command::Clear => ListEvent::Select(Selection::Clear),
            Command::Reset => ListEvent::Reset,
            Command::Query(q) => ListEvent::SetQuery(q),
        };
        let state = list.handle(event);
        print_state(out, list, &state)?;
    }
    Ok(())
}

fn print_state(out: &mut impl Write, list: &List, state: &ListState) -> io::Result<()> {
    writeln!(out, "--------------------")?;
    print_items(out, list, &state.items, PAGE)?;
    match &state.selected {
        Some(record) => writeln!(out, "selected: {}", list.display_text(record)),
        None => writeln!(out, "selected: (none)"),
    }
}

/// 每行：置顶标记、代码、显示文本、英文名。
fn print_items(out: &mut impl Write, list: &List, items: &[ListItem], limit: usize) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "(无匹配)");
    }
    for item in items.iter().take(limit) {
        let mark = if item.is_top { '*' } else { ' ' };
        writeln!(out, "{mark} {}  {}\t{}", item.code, list.display_text(item), item.name_en)?;
    }
    if items.len() > limit {
        writeln!(out, "  ... 另有 {} 条", items.len() - limit)?;
    }
    Ok(())
}
