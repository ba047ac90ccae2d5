use super::*;
use crate::config::PickerLayout;

fn small_catalog() -> Catalog {
    Catalog::parse("square.and.arrow.up\nstar\nstar.fill\n")
}

fn touch_picker() -> SymbolPicker {
    SymbolPicker::new()
        .with_layout(PickerLayout::compact_touch())
        .with_owned_catalog(small_catalog())
}

fn desktop_picker() -> SymbolPicker {
    SymbolPicker::new()
        .with_layout(PickerLayout::desktop())
        .with_owned_catalog(small_catalog())
}

#[test]
fn opens_with_an_empty_search_over_the_whole_catalog() {
    let mut picker = touch_picker();
    assert!(!picker.is_open());
    picker.open();
    assert!(picker.is_open());
    assert_eq!(picker.search(), "");
    assert_eq!(
        picker.visible_symbols(),
        ["square.and.arrow.up", "star", "star.fill"]
    );
}

#[test]
fn search_filters_case_insensitively_in_catalog_order() {
    let mut picker = touch_picker();
    picker.open();
    picker.set_search("star");
    assert_eq!(picker.visible_symbols(), ["star", "star.fill"]);
    picker.set_search("STAR");
    assert_eq!(picker.visible_symbols(), ["star", "star.fill"]);
    picker.set_search("arrow");
    assert_eq!(picker.visible_symbols(), ["square.and.arrow.up"]);
    picker.set_search("");
    assert_eq!(picker.visible_symbols().len(), 3);
}

#[test]
fn visible_set_matches_the_catalog_filter_exactly() {
    let mut picker = touch_picker();
    picker.open();
    for query in ["", "star", "a", "no-such-symbol"] {
        picker.set_search(query);
        assert_eq!(picker.visible_symbols(), picker.catalog().filter(query));
    }
}

#[test]
fn reopening_resets_the_search() {
    let mut picker = touch_picker();
    picker.open();
    picker.set_search("star");
    picker.open();
    assert_eq!(picker.search(), "");
    assert_eq!(picker.visible_symbols().len(), 3);
}

#[test]
fn set_search_is_ignored_while_closed() {
    let mut picker = touch_picker();
    picker.set_search("star");
    assert_eq!(picker.search(), "");
}

#[test]
fn compact_pick_writes_the_binding_and_closes() {
    let mut picker = touch_picker();
    let mut selection = String::new();
    picker.open();
    let event = picker.pick("star.fill", &mut selection);
    assert_eq!(event, PickerEvent::Picked("star.fill".to_owned()));
    assert_eq!(selection, "star.fill");
    assert!(!picker.is_open());
}

#[test]
fn desktop_pick_stages_the_value_and_stays_open() {
    let mut picker = desktop_picker();
    let mut selection = String::new();
    picker.open();
    let event = picker.pick("star.fill", &mut selection);
    assert_eq!(event, PickerEvent::None);
    assert_eq!(selection, "star.fill");
    assert!(picker.is_open());
}

#[test]
fn desktop_cancel_after_a_pick_clears_the_binding() {
    let mut picker = desktop_picker();
    let mut selection = String::new();
    picker.open();
    picker.pick("star.fill", &mut selection);
    let event = picker.cancel(&mut selection);
    assert_eq!(event, PickerEvent::Cancelled);
    assert_eq!(selection, "");
    assert!(!picker.is_open());
}

#[test]
fn desktop_done_keeps_the_staged_value() {
    let mut picker = desktop_picker();
    let mut selection = String::new();
    picker.open();
    picker.pick("star", &mut selection);
    let event = picker.confirm(&mut selection);
    assert_eq!(event, PickerEvent::Picked("star".to_owned()));
    assert_eq!(selection, "star");
    assert!(!picker.is_open());
}

#[test]
fn touch_dismissal_leaves_the_binding_alone() {
    let mut picker = touch_picker();
    let mut selection = String::from("heart");
    picker.open();
    let event = picker.dismiss();
    assert_eq!(event, PickerEvent::Dismissed);
    assert_eq!(selection, "heart");
    assert!(!picker.is_open());

    // The close affordance routes to dismissal on touch presets.
    picker.open();
    assert_eq!(picker.close_request(&mut selection), PickerEvent::Dismissed);
    assert_eq!(selection, "heart");
}

#[test]
fn close_request_cancels_on_the_desktop_preset() {
    let mut picker = desktop_picker();
    let mut selection = String::from("heart");
    picker.open();
    assert_eq!(picker.close_request(&mut selection), PickerEvent::Cancelled);
    assert_eq!(selection, "");
}

#[test]
fn cancel_without_clearing_preserves_the_binding() {
    let mut picker = SymbolPicker::new()
        .with_layout(PickerLayout {
            cancel_clears_selection: false,
            ..PickerLayout::desktop()
        })
        .with_owned_catalog(small_catalog());
    let mut selection = String::from("star");
    picker.open();
    assert_eq!(picker.cancel(&mut selection), PickerEvent::Cancelled);
    assert_eq!(selection, "star");
}

#[test]
fn default_picker_uses_the_full_bundled_catalog() {
    let picker = SymbolPicker::new();
    assert_eq!(picker.catalog().len(), Catalog::full().len());
}
