use std::collections::HashSet;

use country_core::{ListOptions, SortBy, filter::PreparedQuery};
use country_data::{countries, derive, engine};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

fn all_codes() -> Vec<String> {
    countries().iter().map(|r| r.code.clone()).collect()
}

fn any_sort() -> impl Strategy<Value = SortBy> {
    select(SortBy::ALL.to_vec())
}

/// 查询词：代码/名称片段、随机字母或空白。
fn any_query() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{0,3}",
        "[ \t]{0,3}",
        select(vec!["us", "new", "台", "美", "land", "IS", "南", "republic"])
            .prop_map(str::to_owned),
    ]
}

proptest! {
    #[test]
    fn filtering_is_idempotent(q in any_query(), sort_by in any_sort()) {
        let options = ListOptions::new().sort_by(sort_by);
        let once = derive(&options, &q);
        let twice = engine().filter(once.clone(), &q);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn blank_query_is_base_list(ws in "[ \t]{0,4}", sort_by in any_sort()) {
        let options = ListOptions::new().sort_by(sort_by);
        prop_assert_eq!(derive(&options, &ws), engine().base_list(&options));
    }

    #[test]
    fn whitelist_bounds_the_list(
        codes in subsequence(all_codes(), 0..30),
        extra in "[A-Z]{2}",
    ) {
        let mut include = codes.clone();
        include.push(extra.clone());
        let items = derive(&ListOptions::new().include_only(include), "");

        let mut expected: HashSet<String> = codes.into_iter().collect();
        if countries().iter().any(|r| r.code == extra) {
            expected.insert(extra);
        }
        prop_assert_eq!(items.len(), expected.len());
        prop_assert!(items.iter().all(|c| expected.contains(&c.code)));
    }

    #[test]
    fn pinned_items_form_the_prefix(
        top in subsequence(all_codes(), 0..8).prop_shuffle(),
        sort_by in any_sort(),
    ) {
        let items = derive(&ListOptions::new().top_list(top.clone()).sort_by(sort_by), "");
        prop_assert_eq!(items.len(), countries().len());

        let head: Vec<&str> = items[..top.len()].iter().map(|c| c.code.as_str()).collect();
        let want: Vec<&str> = top.iter().map(String::as_str).collect();
        prop_assert_eq!(head, want);
        prop_assert!(items[..top.len()].iter().all(|c| c.is_top));
        prop_assert!(items[top.len()..].iter().all(|c| !c.is_top));
    }

    #[test]
    fn results_match_and_are_ranked(q in any_query(), sort_by in any_sort()) {
        let items = derive(&ListOptions::new().sort_by(sort_by), &q);
        let Some(query) = PreparedQuery::new(&q) else {
            prop_assert_eq!(items.len(), countries().len());
            return Ok(());
        };

        let ranks: Vec<_> = items
            .iter()
            .map(|c| query.relevance(c))
            .collect::<Option<_>>()
            .ok_or_else(|| TestCaseError::fail("non-matching item in result"))?;
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));

        let expected = countries().iter().filter(|r| query.relevance(r).is_some()).count();
        prop_assert_eq!(items.len(), expected);
    }
}
