use std::cmp::Ordering;

use country_collate::LocaleCollator;
use country_core::SortBy;
use proptest::prelude::*;
use proptest::sample::select;

fn any_sort() -> impl Strategy<Value = SortBy> {
    select(SortBy::ALL.to_vec())
}

/// 混合拉丁字母、重音字母、标点与常见汉字。
fn any_name() -> impl Strategy<Value = String> {
    "[A-Za-zÅÉéçô .,'()-]{0,8}|[台日美南北中國蘭島亞利加巴]{0,4}|[a-z台灣ㄅ·]{0,5}"
}

proptest! {
    #[test]
    fn reflexive(a in any_name(), sort_by in any_sort()) {
        prop_assert_eq!(LocaleCollator.compare_str(sort_by, &a, &a), Ordering::Equal);
    }

    #[test]
    fn antisymmetric(a in any_name(), b in any_name(), sort_by in any_sort()) {
        let c = LocaleCollator;
        prop_assert_eq!(c.compare_str(sort_by, &a, &b), c.compare_str(sort_by, &b, &a).reverse());
    }

    #[test]
    fn equal_only_when_identical(a in any_name(), b in any_name(), sort_by in any_sort()) {
        let ord = LocaleCollator.compare_str(sort_by, &a, &b);
        prop_assert_eq!(ord == Ordering::Equal, a == b);
    }

    #[test]
    fn transitive(
        a in any_name(),
        b in any_name(),
        c in any_name(),
        sort_by in any_sort(),
    ) {
        let col = LocaleCollator;
        let mut v = [a, b, c];
        v.sort_by(|x, y| col.compare_str(sort_by, x, y));
        prop_assert_ne!(col.compare_str(sort_by, &v[0], &v[1]), Ordering::Greater);
        prop_assert_ne!(col.compare_str(sort_by, &v[1], &v[2]), Ordering::Greater);
        prop_assert_ne!(col.compare_str(sort_by, &v[0], &v[2]), Ordering::Greater);
    }
}
