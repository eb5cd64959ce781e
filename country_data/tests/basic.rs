use country_core::{ListOptions, Selection};
use country_data::{country_list, resolve};

#[test]
fn initial_state_lists_every_country() {
    let list = country_list(ListOptions::default());
    assert_eq!(list.items().len(), 249);
    assert_eq!(list.query(), "");
    assert_eq!(list.selected(), None);
}

#[test]
fn taiwan_record() {
    let list = country_list(ListOptions::default());
    let items = list.items();
    let tw = items.iter().find(|c| c.code == "TW").unwrap();
    assert_eq!(tw.name_zh, "台灣");
    assert_eq!(tw.name_en, "Taiwan");
    assert_eq!(tw.flag, "🇹🇼");
    assert!(!tw.is_top);
}

#[test]
fn select_by_code() {
    let mut list = country_list(ListOptions::default());
    list.set_selected("TW");
    let selected = list.selected().unwrap();
    assert_eq!(selected.code, "TW");
    assert_eq!(selected.name_zh, "台灣");
}

#[test]
fn select_by_record() {
    let mut list = country_list(ListOptions::default());
    let items = list.items();
    let japan = items.iter().find(|c| c.code == "JP").unwrap();
    list.set_selected(japan);
    assert_eq!(list.selected().map(|r| r.code.as_str()), Some("JP"));
}

#[test]
fn clear_selection() {
    let mut list = country_list(ListOptions::default());
    list.set_selected("TW");
    assert!(list.selected().is_some());
    list.set_selected(Selection::Clear);
    assert_eq!(list.selected(), None);
    list.set_selected("JP");
    list.set_selected(None::<&str>);
    assert_eq!(list.selected(), None);
}

#[test]
fn invalid_code_clears_selection() {
    let mut list = country_list(ListOptions::default());
    list.set_selected("TW");
    list.set_selected("INVALID");
    assert_eq!(list.selected(), None);
}

#[test]
fn reset_without_default() {
    let mut list = country_list(ListOptions::default());
    list.set_query("taiwan");
    list.set_selected("TW");
    assert_eq!(list.query(), "taiwan");
    assert!(list.selected().is_some());

    list.reset();
    assert_eq!(list.query(), "");
    assert_eq!(list.selected(), None);
}

#[test]
fn resolve_against_builtin() {
    assert_eq!(resolve("US").map(|r| r.name_zh), Some("美國".to_owned()));
    assert_eq!(resolve("us"), None);
    assert_eq!(resolve(Selection::Clear), None);
}
