//! Browser-only checks. Run with `wasm-pack test --headless --firefox storefront`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use shared_types::ThemePreference;
use storefront::interop::install_theme_shortcut;
use storefront::theme::{
    apply_theme_to_document, document_theme, toggle_affordance, LocalThemeStorage,
    ThemeController, ThemeStorage,
};
use storefront::{render_catalog_markup, CatalogStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "storefront-test-theme";

fn clear_test_key() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(TEST_KEY);
    }
}

#[wasm_bindgen_test]
fn toggling_twice_restores_document_and_storage() {
    clear_test_key();
    let storage = LocalThemeStorage::new(TEST_KEY);
    let mut controller = ThemeController::initialize(storage.clone());
    assert_eq!(controller.current(), ThemePreference::Light);
    apply_theme_to_document(controller.current());

    apply_theme_to_document(controller.toggle());
    assert_eq!(document_theme(), Some(ThemePreference::Dark));
    assert_eq!(storage.load().unwrap().as_deref(), Some("dark"));

    apply_theme_to_document(controller.toggle());
    assert_eq!(document_theme(), Some(ThemePreference::Light));
    assert_eq!(storage.load().unwrap().as_deref(), Some("light"));
    clear_test_key();
}

#[wasm_bindgen_test]
fn persisted_dark_survives_restart() {
    clear_test_key();
    let storage = LocalThemeStorage::new(TEST_KEY);
    storage.store("dark").unwrap();

    let controller = ThemeController::initialize(LocalThemeStorage::new(TEST_KEY));
    assert_eq!(controller.current(), ThemePreference::Dark);
    assert_eq!(toggle_affordance(controller.current()).label, "Light Mode");
    clear_test_key();
}

#[wasm_bindgen_test]
fn container_replace_is_idempotent() {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    let markup = render_catalog_markup(CatalogStore::builtin().products());

    container.set_inner_html(&markup);
    container.set_inner_html(&markup);

    let buttons = container.query_selector_all(".buy-button").unwrap();
    assert_eq!(buttons.length(), 3);
    let ids: Vec<String> = (0..buttons.length())
        .filter_map(|i| buttons.get(i))
        .filter_map(|node| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(node).ok())
        .filter_map(|button| button.get_attribute("data-product-id"))
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

fn dispatch_keydown(key: &str, ctrl: bool) -> web_sys::KeyboardEvent {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key(key);
    init.set_ctrl_key(ctrl);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    document.dispatch_event(&event).unwrap();
    event
}

#[wasm_bindgen_test]
fn ctrl_t_keydown_toggles_and_suppresses_default() {
    let toggles = Rc::new(Cell::new(0u32));
    let counter = toggles.clone();
    install_theme_shortcut(move || counter.set(counter.get() + 1)).unwrap();

    let event = dispatch_keydown("t", true);
    assert_eq!(toggles.get(), 1);
    assert!(event.default_prevented());

    let event = dispatch_keydown("r", true);
    assert_eq!(toggles.get(), 1);
    assert!(!event.default_prevented());

    let event = dispatch_keydown("t", false);
    assert_eq!(toggles.get(), 1);
    assert!(!event.default_prevented());
}
