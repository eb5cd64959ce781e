use country_core::{ListItem, ListOptions};
use country_data::{country_list, derive, resolve};

fn codes(items: &[ListItem]) -> Vec<&str> {
    items.iter().map(|c| c.code.as_str()).collect()
}

mod show_flag {
    use super::*;

    #[test]
    fn flag_shown_by_default() {
        let list = country_list(ListOptions::default());
        let tw = resolve("TW").unwrap();
        let text = list.display_text(&tw);
        assert!(text.contains("🇹🇼"));
        assert!(text.contains("台灣"));
    }

    #[test]
    fn flag_shown_when_enabled() {
        let list = country_list(ListOptions::new().show_flag(true));
        assert_eq!(list.display_text(&resolve("TW").unwrap()), "🇹🇼 台灣");
    }

    #[test]
    fn flag_hidden_when_disabled() {
        let list = country_list(ListOptions::new().show_flag(false));
        let text = list.display_text(&resolve("TW").unwrap());
        assert_eq!(text, "台灣");
        assert!(!text.contains("🇹🇼"));
    }
}

mod top_list {
    use super::*;

    #[test]
    fn pinned_first_in_given_order() {
        let items = derive(&ListOptions::new().top_list(["TW", "US", "JP"]), "");
        assert_eq!(codes(&items[..3]), ["TW", "US", "JP"]);
    }

    #[test]
    fn pinned_items_are_marked() {
        let items = derive(&ListOptions::new().top_list(["TW", "US"]), "");
        let find = |code: &str| items.iter().find(|c| c.code == code).unwrap();
        assert!(find("TW").is_top);
        assert!(find("US").is_top);
        assert!(!find("JP").is_top);
        assert_eq!(items.iter().filter(|c| c.is_top).count(), 2);
    }

    #[test]
    fn order_is_not_alphabetical() {
        let items = derive(&ListOptions::new().top_list(["JP", "KR", "TW"]), "");
        assert_eq!(codes(&items[..3]), ["JP", "KR", "TW"]);
    }

    #[test]
    fn empty_top_list() {
        let items = derive(&ListOptions::new().top_list(Vec::<String>::new()), "");
        assert!(!items.is_empty());
        assert!(!items[0].is_top);
    }
}

mod include_only {
    use super::*;

    #[test]
    fn only_listed_codes() {
        let items = derive(&ListOptions::new().include_only(["TW", "US", "JP"]), "");
        assert_eq!(items.len(), 3);
        let codes = codes(&items);
        for code in ["TW", "US", "JP"] {
            assert!(codes.contains(&code));
        }
    }

    #[test]
    fn excludes_everything_else() {
        let items = derive(&ListOptions::new().include_only(["TW", "US"]), "");
        let codes = codes(&items);
        assert!(!codes.contains(&"JP"));
        assert!(!codes.contains(&"KR"));
    }

    #[test]
    fn empty_whitelist_is_empty_result() {
        let items = derive(&ListOptions::new().include_only(Vec::<String>::new()), "");
        assert!(items.is_empty());
    }

    #[test]
    fn unknown_codes_are_ignored() {
        let items = derive(&ListOptions::new().include_only(["TW", "XX", "tw"]), "");
        assert_eq!(codes(&items), ["TW"]);
    }

    #[test]
    fn with_top_list() {
        let options = ListOptions::new()
            .top_list(["TW", "US"])
            .include_only(["TW", "US", "JP", "KR"]);
        let items = derive(&options, "");
        assert_eq!(items.len(), 4);
        assert_eq!(codes(&items[..2]), ["TW", "US"]);
        assert!(items[0].is_top && items[1].is_top);
        assert!(!items[2].is_top && !items[3].is_top);
    }
}

mod default_selected {
    use super::*;

    #[test]
    fn initial_selection() {
        let list = country_list(ListOptions::new().default_selected("TW"));
        assert_eq!(list.selected().map(|r| r.code.as_str()), Some("TW"));
    }

    #[test]
    fn invalid_default_is_none() {
        let mut list = country_list(ListOptions::new().default_selected("INVALID"));
        assert_eq!(list.selected(), None);
        list.set_selected("US");
        list.reset();
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn reset_restores_default() {
        let mut list = country_list(ListOptions::new().default_selected("JP"));
        list.set_query("korea");
        list.set_selected("US");
        assert_eq!(list.selected().map(|r| r.code.as_str()), Some("US"));

        list.reset();
        assert_eq!(list.query(), "");
        assert_eq!(list.selected().map(|r| r.code.as_str()), Some("JP"));
        assert_eq!(list.selected(), resolve("JP").as_ref());
    }
}

#[test]
fn all_options_combined() {
    let list = country_list(
        ListOptions::new()
            .show_flag(false)
            .top_list(["TW", "JP"])
            .include_only(["TW", "JP", "US", "KR"])
            .default_selected("TW"),
    );
    let items = list.items();
    assert_eq!(items.len(), 4);
    assert_eq!(codes(&items[..2]), ["TW", "JP"]);
    assert_eq!(list.display_text(&items[0]), "台灣");
    assert_eq!(list.selected().map(|r| r.code.as_str()), Some("TW"));
}
