//! Browser tests for script injection and the editor shortcut.
//!
//! Run with `wasm-pack test --headless --firefox wasm-ui`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use playground_rs::{LoadError, Trigger, is_compile_shortcut};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use wasm_ui::components::{EditorPanel, EditorPanelProps, key_chord};
use wasm_ui::script::{JsBootstrap, SCRIPT_MARKER, create_script, describe, inject_script};
use web_sys::{HtmlElement, HtmlTextAreaElement, KeyboardEvent, KeyboardEventInit};
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

fn keydown(key: &str, ctrl: bool, meta: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_ctrl_key(ctrl);
    init.set_meta_key(meta);
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

#[wasm_bindgen_test]
fn test_script_attributes() {
    let script = create_script("http://localhost:3000/api/project/42/playground.js").unwrap();

    assert_eq!(
        script.get_attribute("src").as_deref(),
        Some("http://localhost:3000/api/project/42/playground.js")
    );
    assert_eq!(
        script.get_attribute("type").as_deref(),
        Some("application/javascript")
    );
    assert_eq!(script.get_attribute("crossorigin").as_deref(), Some(""));
    assert!(script.has_attribute(SCRIPT_MARKER));
}

#[wasm_bindgen_test]
async fn test_data_url_script_loads_and_registers_bootstrap() {
    let url = "data:application/javascript,var __playground_test_boot = function (u) { window.__playground_test_url = u; };";
    inject_script(url).await.unwrap();

    let bootstrap = JsBootstrap::lookup("__playground_test_boot").unwrap();
    playground_rs::Bootstrap::start(&bootstrap, "/api/project/42/playground.wasm")
        .await
        .unwrap();

    let window = web_sys::window().unwrap();
    let seen = js_sys::Reflect::get(&window, &JsValue::from_str("__playground_test_url")).unwrap();
    assert_eq!(seen.as_string().as_deref(), Some("/api/project/42/playground.wasm"));
}

#[wasm_bindgen_test]
async fn test_failed_script_rejects() {
    let err = inject_script("http://127.0.0.1:9/missing.js").await.unwrap_err();
    assert!(matches!(err, LoadError::Script { .. }));
}

#[wasm_bindgen_test]
fn test_missing_bootstrap() {
    assert!(matches!(
        JsBootstrap::lookup("__no_such_bootstrap"),
        Err(LoadError::MissingBootstrap(_))
    ));
    assert!(matches!(
        JsBootstrap::lookup("alert(1)"),
        Err(LoadError::MissingBootstrap(_))
    ));
}

#[wasm_bindgen_test]
fn test_reserved_word_bootstrap_is_missing() {
    assert!(matches!(
        JsBootstrap::lookup("class"),
        Err(LoadError::MissingBootstrap(_))
    ));
}

#[wasm_bindgen_test]
fn test_global_property_bootstrap() {
    let window = web_sys::window().unwrap();
    let function = js_sys::Function::new_with_args("u", "return u;");
    js_sys::Reflect::set(&window, &JsValue::from_str("__playground_prop_boot"), &function).unwrap();

    assert!(JsBootstrap::lookup("__playground_prop_boot").is_ok());
}

/// Mount an `EditorPanel` showing `value`, recording every compile request.
async fn mount_editor(value: &str) -> (web_sys::Element, Rc<RefCell<Vec<(String, Trigger)>>>) {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let received = Rc::new(RefCell::new(Vec::new()));
    let props = EditorPanelProps {
        value: value.to_string(),
        compiling: false,
        on_change: Callback::noop(),
        on_compile: {
            let received = received.clone();
            Callback::from(move |request| received.borrow_mut().push(request))
        },
    };
    yew::Renderer::<EditorPanel>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(Duration::from_millis(10)).await;

    (root, received)
}

#[wasm_bindgen_test]
async fn test_editor_shortcut_compiles_current_text() {
    let (root, received) = mount_editor("fn main() {}").await;
    let textarea: HtmlTextAreaElement = root
        .query_selector("textarea")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    textarea.set_value("fn main() { edited }");

    let plain_enter = keydown("Enter", false, false);
    textarea.dispatch_event(&plain_enter).unwrap();
    assert!(received.borrow().is_empty());

    let event = keydown("Enter", true, false);
    textarea.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    assert_eq!(
        *received.borrow(),
        vec![("fn main() { edited }".to_string(), Trigger::Shortcut)]
    );
}

#[wasm_bindgen_test]
async fn test_shortcut_and_button_send_same_source() {
    let (root, received) = mount_editor("fn main() {}").await;
    let textarea: HtmlTextAreaElement = root
        .query_selector("textarea")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let button: HtmlElement = root
        .query_selector("button")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    textarea.dispatch_event(&keydown("Enter", false, true)).unwrap();
    button.click();

    assert_eq!(
        *received.borrow(),
        vec![
            ("fn main() {}".to_string(), Trigger::Shortcut),
            ("fn main() {}".to_string(), Trigger::Button),
        ]
    );
}

#[wasm_bindgen_test]
fn test_keyboard_shortcut() {
    assert!(is_compile_shortcut(&key_chord(&keydown("Enter", true, false))));
    assert!(is_compile_shortcut(&key_chord(&keydown("Enter", false, true))));
    assert!(!is_compile_shortcut(&key_chord(&keydown("Enter", false, false))));
}

#[wasm_bindgen_test]
fn test_describe_js_values() {
    assert_eq!(describe(&JsValue::from_str("boom")), "boom");
    assert_eq!(describe(&js_sys::Error::new("bad wasm").into()), "bad wasm");
}
