//! 英文名排序：三级比较（近似 CLDR root 规则）。
//!
//! - 一级：字母折叠为基本字母且忽略大小写；空白 < 标点 < 数字 < 字母
//! - 二级：无变音符号 < 有变音符号（`Aland` < `Åland`）
//! - 三级：小写 < 大写
//!
//! 三级都相等时按码位比较，保证全序。

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punct,
    Digit,
    Letter,
}

#[derive(Debug, Clone, Copy)]
struct Element {
    class: Class,
    /// 小写基本字母（非字母时为字符本身）
    base: char,
    accented: bool,
    upper: bool,
}

/// 去掉常见拉丁字母的变音符号，返回 (基本字母, 是否带变音)。保留大小写。
fn strip_accent(ch: char) -> (char, bool) {
    let base = match ch {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'Ç' | 'Ć' | 'Č' => 'C',
        'ç' | 'ć' | 'č' => 'c',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'İ' => 'I',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => 'i',
        'Ñ' | 'Ń' | 'Ň' => 'N',
        'ñ' | 'ń' | 'ň' => 'n',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => 'O',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'Ś' | 'Š' | 'Ş' => 'S',
        'ś' | 'š' | 'ş' => 's',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' => 'U',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'Ý' | 'Ÿ' => 'Y',
        'ý' | 'ÿ' => 'y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return (ch, false),
    };
    (base, true)
}

fn element(ch: char) -> Element {
    let (base, accented) = strip_accent(ch);
    let class = if ch.is_whitespace() {
        Class::Space
    } else if ch.is_numeric() {
        Class::Digit
    } else if ch.is_alphabetic() {
        Class::Letter
    } else {
        Class::Punct
    };
    Element {
        class,
        base: base.to_lowercase().next().unwrap_or(base),
        accented,
        upper: ch.is_uppercase(),
    }
}

/// 比较两个英文名。
pub fn compare(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| s.chars().map(element).map(|e| (e.class, e.base)).collect::<Vec<_>>();
    let secondary = |s: &str| s.chars().map(|c| element(c).accented).collect::<Vec<_>>();
    let tertiary = |s: &str| s.chars().map(|c| element(c).upper).collect::<Vec<_>>();

    primary(a)
        .cmp(&primary(b))
        .then_with(|| secondary(a).cmp(&secondary(b)))
        .then_with(|| tertiary(a).cmp(&tertiary(b)))
        .then_with(|| a.cmp(b))
}

/// 单字比较（同样三级，最后按码位）。
pub(crate) fn compare_char(a: char, b: char) -> Ordering {
    let (x, y) = (element(a), element(b));
    (x.class, x.base)
        .cmp(&(y.class, y.base))
        .then(x.accented.cmp(&y.accented))
        .then(x.upper.cmp(&y.upper))
        .then(a.cmp(&b))
}
