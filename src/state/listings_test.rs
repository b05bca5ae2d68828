use super::*;

fn listing(id: &str) -> Listing {
    Listing {
        id: id.to_owned(),
        name: format!("Listing {id}"),
        image_urls: vec![],
        owner_ref: "u-1".to_owned(),
    }
}

#[test]
fn listings_state_defaults() {
    let state = ListingsState::default();
    assert!(state.items.is_empty());
    assert!(!state.show_error);
}

#[test]
fn set_items_clears_the_error_flag() {
    let mut state = ListingsState {
        show_error: true,
        ..ListingsState::default()
    };
    state.set_items(vec![listing("l-1")]);
    assert_eq!(state.items.len(), 1);
    assert!(!state.show_error);
}

#[test]
fn begin_fetch_clears_a_stale_error_and_keeps_the_list() {
    let mut state = ListingsState::default();
    state.set_items(vec![listing("l-1")]);
    state.show_error = true;
    state.begin_fetch();
    assert!(!state.show_error);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn remove_drops_exactly_the_matching_id() {
    let mut state = ListingsState::default();
    state.set_items(vec![listing("l-1"), listing("l-2"), listing("l-3")]);
    state.remove("l-2");
    let ids: Vec<&str> = state.items.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["l-1", "l-3"]);
}

#[test]
fn remove_unknown_id_leaves_the_list_untouched() {
    let mut state = ListingsState::default();
    state.set_items(vec![listing("l-1"), listing("l-2")]);
    state.remove("l-9");
    assert_eq!(state.items.len(), 2);
}
