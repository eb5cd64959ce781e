//! 汉字表：笔画数 + 注音读音，用于 `zh`（笔画）与 `zhuyin`（注音）排序。
//!
//! 表由 `build.rs` 从 `asset/han.tsv` 生成，覆盖内置数据集用到的全部汉字。
//! 笔画数、读音及同组内的先后（同笔画序、同音序）与 CLDR `zh-TW` 的
//! stroke / zhuyin 排序一致；同组内的先后不是码位序，所以单独存一列。
//!
//! 单字类别（与 CLDR 中文排序的文字重排一致）：
//! - 空白、标点、数字在所有汉字之前
//! - 表外汉字排在所有表内汉字之后，按码位比较
//! - 注音符号在汉字之后，其他字母（拉丁、希腊等）最后
//!
//! 非汉字类别内部按 `english` 的单字规则比较。

use std::cmp::Ordering;

use crate::english;

include!(concat!(env!("OUT_DIR"), "/han_gen.rs"));

/// 单个汉字的排序信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanInfo {
    pub ch: char,
    /// 总笔画数
    pub strokes: u8,
    /// 同笔画数的字之间的先后，从 1 开始
    pub stroke_seq: u8,
    /// 注音符号串，例如 `"ㄊㄞ"`
    pub zhuyin: &'static str,
    /// 声调：1-4，5 为轻声
    pub tone: u8,
    /// 同读音同声调的字之间的先后，从 1 开始
    pub zhuyin_seq: u8,
}

/// 查表（二分查找）。
pub fn lookup(ch: char) -> Option<HanInfo> {
    HAN_TABLE
        .binary_search_by_key(&ch, |&(c, ..)| c)
        .ok()
        .map(|i| {
            let (ch, strokes, stroke_seq, zhuyin, tone, zhuyin_seq) = HAN_TABLE[i];
            HanInfo {
                ch,
                strokes,
                stroke_seq,
                zhuyin,
                tone,
                zhuyin_seq,
            }
        })
}

/// CJK 统一表意文字（含扩展 A 与兼容区）。
pub fn is_han(ch: char) -> bool {
    matches!(ch,
        '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{3134F}')
}

fn is_bopomofo(ch: char) -> bool {
    matches!(ch, '\u{3100}'..='\u{312F}' | '\u{31A0}'..='\u{31BF}')
}

/// 单字排序类别，顺序即先后。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    /// 空白、标点、数字、符号
    Symbol,
    Known,
    Unknown,
    Bopomofo,
    Letter,
}

fn class_of(ch: char) -> (Class, Option<HanInfo>) {
    if let Some(info) = lookup(ch) {
        return (Class::Known, Some(info));
    }
    let class = if is_han(ch) {
        Class::Unknown
    } else if is_bopomofo(ch) {
        Class::Bopomofo
    } else if ch.is_alphabetic() {
        Class::Letter
    } else {
        Class::Symbol
    };
    (class, None)
}

/// 笔画序：逐字比较 (笔画数, 同笔画序)。
pub fn compare_strokes(a: &str, b: &str) -> Ordering {
    compare_by(a, b, |x, y| {
        x.strokes
            .cmp(&y.strokes)
            .then(x.stroke_seq.cmp(&y.stroke_seq))
    })
}

/// 注音序：逐字比较 (注音符号序列, 声调, 同音序)。
///
/// 注音符号在 Unicode 中的排列（ㄅㄆㄇㄈ…ㄧㄨㄩ）即传统注音顺序，直接按码位比较。
pub fn compare_zhuyin(a: &str, b: &str) -> Ordering {
    compare_by(a, b, |x, y| {
        x.zhuyin
            .cmp(y.zhuyin)
            .then(x.tone.cmp(&y.tone))
            .then(x.zhuyin_seq.cmp(&y.zhuyin_seq))
    })
}

fn compare_char<F>(x: char, y: char, known: &F) -> Ordering
where
    F: Fn(HanInfo, HanInfo) -> Ordering,
{
    let (cx, ix) = class_of(x);
    let (cy, iy) = class_of(y);
    let within = match (cx, ix, iy) {
        (Class::Known, Some(ix), Some(iy)) => known(ix, iy),
        (Class::Symbol | Class::Letter, ..) if cx == cy => english::compare_char(x, y),
        _ => Ordering::Equal,
    };
    cx.cmp(&cy).then(within).then(x.cmp(&y))
}

/// 逐字比较：先类别，再类别内的键，最后码位；短的前缀在前。
fn compare_by<F>(a: &str, b: &str, known: F) -> Ordering
where
    F: Fn(HanInfo, HanInfo) -> Ordering,
{
    let mut xs = a.chars();
    let mut ys = b.chars();
    loop {
        match (xs.next(), ys.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x == y => continue,
            (Some(x), Some(y)) => {
                let ord = compare_char(x, y, &known);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
