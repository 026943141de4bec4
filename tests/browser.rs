#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use broadcast_truth::{configure, mount, WidgetConfig, PLATFORMS};
use log::LevelFilter;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document")
}

fn element(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("missing #{id}"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

fn active_id() -> Option<String> {
    document().active_element().map(|element| element.id())
}

fn is_open(overlay: &HtmlElement) -> bool {
    overlay.class_list().contains("open")
}

async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(20)).await;
}

async fn mount_with_prefix(prefix: &str) -> WidgetConfig {
    let config = WidgetConfig {
        id_prefix: prefix.to_string(),
        ..WidgetConfig::default()
    };
    mount(&document(), config.clone()).expect("mount");
    settle().await;
    config
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let event =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event");
    document().dispatch_event(&event).expect("dispatch");
}

#[wasm_bindgen_test]
async fn trigger_then_escape_round_trip() {
    let ids = mount_with_prefix("roundtrip").await.ids();
    let overlay = element(&ids.overlay);
    assert!(!is_open(&overlay));

    element(&ids.trigger).click();
    settle().await;
    assert!(is_open(&overlay));
    assert_eq!(active_id(), Some(ids.close.clone()));

    let rows = overlay.get_elements_by_class_name("bp-share-btn");
    assert_eq!(rows.length() as usize, PLATFORMS.len());
    for index in 0..rows.length() {
        let href = rows
            .item(index)
            .and_then(|row| row.get_attribute("href"))
            .expect("href");
        assert!(href.contains("I%20have%20deployed%20the%20Burgess%20Principle"));
    }

    press_escape();
    settle().await;
    assert!(!is_open(&overlay));
    assert_eq!(active_id(), Some(ids.trigger.clone()));
}

#[wasm_bindgen_test]
async fn close_control_and_backdrop_dismiss() {
    let ids = mount_with_prefix("dismiss").await.ids();
    let overlay = element(&ids.overlay);

    element(&ids.trigger).click();
    settle().await;
    element(&ids.close).click();
    settle().await;
    assert!(!is_open(&overlay));
    assert_eq!(active_id(), Some(ids.trigger.clone()));

    element(&ids.trigger).click();
    settle().await;
    overlay.click();
    settle().await;
    assert!(!is_open(&overlay));
    assert_eq!(active_id(), Some(ids.trigger.clone()));
}

#[wasm_bindgen_test]
async fn clicks_inside_the_dialog_keep_it_open() {
    let ids = mount_with_prefix("inside").await.ids();
    let overlay = element(&ids.overlay);

    element(&ids.trigger).click();
    settle().await;
    element(&ids.modal).click();
    settle().await;
    assert!(is_open(&overlay));

    press_escape();
    settle().await;
    assert!(!is_open(&overlay));
}

#[wasm_bindgen_test]
async fn escape_while_closed_leaves_focus_alone() {
    let ids = mount_with_prefix("idle").await.ids();
    let overlay = element(&ids.overlay);
    let modal = element(&ids.modal);
    modal.set_tab_index(-1);
    let _ = modal.focus();

    press_escape();
    settle().await;
    assert!(!is_open(&overlay));
    assert_ne!(active_id(), Some(ids.trigger.clone()));
}

#[wasm_bindgen_test]
fn configuration_is_read_with_logging_live() {
    let window = web_sys::window().expect("window");
    let key = JsValue::from_str(WidgetConfig::GLOBAL_KEY);

    js_sys::Reflect::set(&window, &key, &JsValue::from_str("not an object")).expect("set");
    let config = configure(&window);
    assert_eq!(config, WidgetConfig::default());
    assert!(log::log_enabled!(log::Level::Warn));

    let overrides = js_sys::JSON::parse(r#"{"logLevel":"error","idPrefix":"quiet"}"#).expect("json");
    js_sys::Reflect::set(&window, &key, &overrides).expect("set");
    let config = configure(&window);
    assert_eq!(config.id_prefix, "quiet");
    assert_eq!(log::max_level(), LevelFilter::Error);

    js_sys::Reflect::delete_property(window.as_ref(), &key).expect("delete");
    log::set_max_level(LevelFilter::Info);
}
