// SPDX-License-Identifier: LGPL-3.0-only
//! End-to-end controller scenarios over dictionary and filesystem
//! providers.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crumbs_core::geometry::Rect;
use crumbs_core::input::{Key, MouseButton};
use crumbs_services::dictionary::Dictionary;
use crumbs_services::filesystem::Filesystem;
use crumbs_services::DataProvider;
use crumbs_widgets::{
    AddressBarEvent, ArrowDirection, BarConfig, BreadcrumbsAddressBar, ViewMode,
};

fn dict_provider(yaml: &str) -> Box<dyn DataProvider> {
    Box::new(Dictionary::new(serde_yaml::from_str(yaml).unwrap()).unwrap())
}

fn bar_at(provider: Box<dyn DataProvider>, initial: &str) -> BreadcrumbsAddressBar {
    BreadcrumbsAddressBar::new(
        provider,
        BarConfig {
            initial_path: PathBuf::from(initial),
            ..BarConfig::default()
        },
    )
}

type Events = Rc<RefCell<Vec<PathBuf>>>;

fn record(events: &Events) -> impl Fn(&Path) + 'static {
    let sink = events.clone();
    move |path| sink.borrow_mut().push(path.to_path_buf())
}

#[test]
fn test_edit_mode_round_trip() {
    let provider = dict_provider(r#"{"C:": {"Users": null}, "D:": null}"#);
    let selected: Events = Events::default();
    let mut bar = bar_at(provider, "C:").with_on_path_selected(record(&selected));
    selected.borrow_mut().clear();

    bar.handle_event(AddressBarEvent::SwitchSpaceClicked(MouseButton::Left));
    assert_eq!(bar.mode(), ViewMode::Edit);
    assert_eq!(bar.edit().text(), "C:");
    assert!(bar.edit().all_selected());

    bar.edit_typed("D:");
    bar.handle_event(AddressBarEvent::EditKey(Key::Enter));
    assert_eq!(bar.path(), Path::new("D:"));
    assert_eq!(bar.mode(), ViewMode::Breadcrumbs);
    assert!(!bar.edit().is_visible());
    assert_eq!(*selected.borrow(), vec![PathBuf::from("D:")]);
}

#[test]
fn test_escape_and_focus_loss_revert_edits() {
    let provider = dict_provider(r#"{"C:": null, "D:": null}"#);
    let mut bar = bar_at(provider, "C:");

    bar.handle_event(AddressBarEvent::SwitchSpaceClicked(MouseButton::Left));
    bar.edit_typed("D:");
    bar.handle_event(AddressBarEvent::EditKey(Key::Escape));
    assert_eq!(bar.path(), Path::new("C:"));
    assert_eq!(bar.edit().text(), "C:");

    bar.handle_event(AddressBarEvent::SwitchSpaceClicked(MouseButton::Left));
    bar.edit_typed("D:");
    bar.handle_event(AddressBarEvent::EditFocusLost);
    assert_eq!(bar.mode(), ViewMode::Breadcrumbs);
    assert_eq!(bar.path(), Path::new("C:"));
}

#[test]
fn test_context_menu_suppresses_focus_loss_revert() {
    let provider = dict_provider(r#"{"C:": null}"#);
    let mut bar = bar_at(provider, "C:");

    bar.handle_event(AddressBarEvent::SwitchSpaceClicked(MouseButton::Left));
    bar.handle_event(AddressBarEvent::EditContextMenuOpened);
    bar.handle_event(AddressBarEvent::EditFocusLost);
    // Still editing while the context menu is up.
    assert_eq!(bar.mode(), ViewMode::Edit);

    bar.handle_event(AddressBarEvent::EditContextMenuClosed);
    assert_eq!(bar.mode(), ViewMode::Breadcrumbs);
}

#[test]
fn test_right_click_on_switch_space_does_not_edit() {
    let provider = dict_provider(r#"{"C:": null}"#);
    let mut bar = bar_at(provider, "C:");
    bar.handle_event(AddressBarEvent::SwitchSpaceClicked(MouseButton::Right));
    assert_eq!(bar.mode(), ViewMode::Breadcrumbs);
}

#[test]
fn test_nonexistent_path_keeps_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let errors: Events = Events::default();
    let mut bar = bar_at(Box::new(Filesystem::new()), &dir.path().display().to_string())
        .with_on_path_error(record(&errors));
    let before = bar.path().to_path_buf();

    assert!(!bar.set_path("/nonexistent"));
    assert_eq!(bar.path(), before);
    assert_eq!(*errors.borrow(), vec![PathBuf::from("/nonexistent")]);
}

#[test]
fn test_set_path_is_idempotent() {
    let provider = dict_provider(r#"{"a": {"b": {"c": {"d": null}}}}"#);
    let selected: Events = Events::default();
    let mut bar = bar_at(provider, "a/b/c/d").with_on_path_selected(record(&selected));
    let rect = Rect::new(0.0, 0.0, 80.0, 24.0);
    bar.relayout(rect);
    let hidden = bar.layout().count_hidden();
    let visible = bar.layout().count_visible();
    selected.borrow_mut().clear();

    assert!(bar.set_path("a/b/c/d"));
    bar.relayout(rect);
    assert_eq!(bar.path(), Path::new("a/b/c/d"));
    assert_eq!(bar.layout().count_hidden(), hidden);
    assert_eq!(bar.layout().count_visible(), visible);
    assert_eq!(selected.borrow().len(), 1);
}

#[test]
fn test_crumbs_are_rebuilt_root_to_leaf() {
    let provider = dict_provider(r#"{"/": {"home": {"user": null}}}"#);
    let bar = bar_at(provider, "/home/user");
    let labels: Vec<&str> = bar.crumbs().map(|crumb| crumb.label()).collect();
    assert_eq!(labels, ["/", "home", "user"]);
}

#[test]
fn test_overflow_menu_lists_nearest_crumb_first() {
    let provider = dict_provider(r#"{"a": {"b": {"c": {"d": null}}}}"#);
    let mut bar = bar_at(provider, "a/b/c/d");
    // Four 35 px crumbs in 80 px: two must hide.
    bar.relayout(Rect::new(0.0, 0.0, 80.0, 24.0));
    assert_eq!(bar.layout().count_hidden(), 2);
    assert!(bar.hidden_indicator_visible());
    assert_eq!(bar.root_arrow(), ArrowDirection::Left);

    let labels: Vec<String> = bar
        .hidden_menu_entries()
        .into_iter()
        .map(|entry| entry.label)
        .collect();
    assert_eq!(labels, ["b", "a"]);
}

#[test]
fn test_crumb_menu_is_lazy_and_discarded_on_close() {
    let provider = dict_provider(r#"{"a": {"x": null, "y": null}}"#);
    let mut bar = bar_at(provider, "a/x");
    // Index 0 is the "a" crumb.
    let labels: Vec<String> = bar
        .open_crumb_menu(0)
        .iter()
        .map(|entry| entry.label.clone())
        .collect();
    assert_eq!(labels, ["x", "y"]);

    bar.close_crumb_menu();
    assert!(!bar.crumb_menu().is_open());
    assert!(bar.crumb_menu().entries().is_empty());
    // Reopening enumerates afresh.
    assert_eq!(bar.open_crumb_menu(0).len(), 2);
}

#[test]
fn test_menu_selection_navigates() {
    let provider = dict_provider(r#"{"a": {"x": null, "y": null}}"#);
    let mut bar = bar_at(provider, "a/x");
    bar.handle_event(AddressBarEvent::MenuEntrySelected(PathBuf::from("a/y")));
    assert_eq!(bar.path(), Path::new("a/y"));
}

#[test]
fn test_root_menu_places_and_device_refresh() {
    let provider = dict_provider(
        r#"{"root1": null, "root2": null,
            "/metadata": {"places": {"stuff": "root2"}}}"#,
    );
    let mut bar = bar_at(provider, "root1");
    assert_eq!(
        bar.root_menu().places(),
        [("stuff".to_string(), PathBuf::from("root2"))]
    );
    let devices: Vec<String> = bar
        .root_menu()
        .devices()
        .iter()
        .map(|entry| entry.label.clone())
        .collect();
    assert_eq!(devices, ["root1", "root2"]);

    bar.handle_event(AddressBarEvent::DevicesChanged);
    assert_eq!(bar.root_menu().devices().len(), 2);
}

#[test]
fn test_mouse_press_routes_to_crumbs_and_switch_space() {
    let provider = dict_provider(r#"{"a": {"b": null}}"#);
    let mut bar = bar_at(provider, "a/b");
    bar.relayout(Rect::new(0.0, 0.0, 400.0, 24.0));

    // Far right is the switch space.
    bar.mouse_press(nalgebra::Vector2::new(390.0, 10.0), MouseButton::Left);
    assert_eq!(bar.mode(), ViewMode::Edit);
    bar.cancel_edit();

    // The first crumb starts at x = 0.
    bar.mouse_press(nalgebra::Vector2::new(5.0, 10.0), MouseButton::Left);
    assert_eq!(bar.path(), Path::new("a"));
}

#[test]
fn test_browse_result_feeds_set_path() {
    let provider = dict_provider(r#"{"a": null, "b": null}"#);
    let mut bar = bar_at(provider, "a");
    assert!(!bar.browse_result(None));
    assert_eq!(bar.path(), Path::new("a"));
    assert!(bar.browse_result(Some(PathBuf::from("b"))));
    assert_eq!(bar.path(), Path::new("b"));
}

#[test]
fn test_completion_follows_typed_prefix() {
    let provider = dict_provider(r#"{"/": {"sub1": null, "sub2": null}}"#);
    let mut bar = bar_at(provider, "/sub1");
    bar.handle_event(AddressBarEvent::SwitchSpaceClicked(MouseButton::Left));
    bar.edit_typed("/s");
    assert_eq!(bar.completions(), vec!["/sub1".to_string(), "/sub2".to_string()]);
}
