//! 把 `asset/han.tsv` 编译成按码位排序的静态表（`$OUT_DIR/han_gen.rs`）。

use std::{collections::HashSet, env, fmt::Write as _, fs, path::Path};

struct Row {
    ch: char,
    strokes: u8,
    stroke_seq: u8,
    zhuyin: String,
    tone: u8,
    zhuyin_seq: u8,
}

fn parse_u8(field: &str, line: usize, what: &str) -> u8 {
    field
        .parse()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or_else(|| panic!("han.tsv 第 {line} 行：{what}无效"))
}

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR");
    let src = Path::new(&manifest_dir).join("asset").join("han.tsv");
    println!("cargo:rerun-if-changed={}", src.display());

    let text = fs::read_to_string(&src).unwrap_or_else(|e| panic!("read {}: {e}", src.display()));
    let mut rows: Vec<Row> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let [ch, strokes, stroke_seq, zhuyin, tone, zhuyin_seq] = fields[..] else {
            panic!("han.tsv 第 {line_no} 行应为 6 列");
        };
        let mut chars = ch.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            panic!("han.tsv 第 {line_no} 行：`{ch}` 不是单个字符");
        };
        let tone = parse_u8(tone, line_no, "声调");
        assert!((1..=5).contains(&tone), "han.tsv 第 {line_no} 行：声调应为 1-5");
        assert!(
            !zhuyin.is_empty() && zhuyin.chars().all(|c| ('\u{3105}'..='\u{3129}').contains(&c)),
            "han.tsv 第 {line_no} 行：注音只能包含注音符号"
        );
        rows.push(Row {
            ch,
            strokes: parse_u8(strokes, line_no, "笔画数"),
            stroke_seq: parse_u8(stroke_seq, line_no, "同笔画序"),
            zhuyin: zhuyin.to_owned(),
            tone,
            zhuyin_seq: parse_u8(zhuyin_seq, line_no, "同音序"),
        });
    }

    rows.sort_by_key(|r| r.ch);
    if let Some(w) = rows.windows(2).find(|w| w[0].ch == w[1].ch) {
        panic!("han.tsv 中 `{}` 重复", w[0].ch);
    }
    // 同组内序号不能重复，否则比较结果退化为码位序
    let mut stroke_keys = HashSet::new();
    let mut zhuyin_keys = HashSet::new();
    for r in &rows {
        assert!(
            stroke_keys.insert((r.strokes, r.stroke_seq)),
            "han.tsv：`{}` 的同笔画序 {} 重复",
            r.ch,
            r.stroke_seq
        );
        assert!(
            zhuyin_keys.insert((r.zhuyin.clone(), r.tone, r.zhuyin_seq)),
            "han.tsv：`{}` 的同音序 {} 重复",
            r.ch,
            r.zhuyin_seq
        );
    }

    let mut out = String::new();
    out.push_str("/// (字, 笔画数, 同笔画序, 注音, 声调, 同音序)，按码位升序。\n");
    out.push_str("static HAN_TABLE: &[(char, u8, u8, &str, u8, u8)] = &[\n");
    for r in &rows {
        writeln!(
            out,
            "    ({:?}, {}, {}, {:?}, {}, {}),",
            r.ch, r.strokes, r.stroke_seq, r.zhuyin, r.tone, r.zhuyin_seq
        )
        .expect("write to String");
    }
    out.push_str("];\n");

    let dest = Path::new(&env::var("OUT_DIR").expect("OUT_DIR")).join("han_gen.rs");
    fs::write(&dest, out).unwrap_or_else(|e| panic!("write {}: {e}", dest.display()));
}
