#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Object, Reflect};
use slidekit_wasm::{abi_version, WasmSlider};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn event_types(outputs: &JsValue) -> Vec<String> {
    let obj = Object::from(outputs.clone());
    let events = Reflect::get(&obj, &JsValue::from_str("events")).unwrap();
    let arr = Array::from(&events);
    (0..arr.length())
        .filter_map(|i| {
            Reflect::get(&arr.get(i), &JsValue::from_str("type"))
                .ok()?
                .as_string()
        })
        .collect()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let s = WasmSlider::new(JsValue::UNDEFINED, 5, 1024.0);
    assert!(s.is_ok());
}

/// it should emit init on the first step and navigate through commands
#[wasm_bindgen_test]
fn step_emits_init_and_slide_changes() {
    let mut s = WasmSlider::from_json(r#"{"loop": false}"#, 4, 1024.0).unwrap();
    let out = s.step(0.0, JsValue::UNDEFINED).unwrap();
    assert_eq!(event_types(&out), vec!["init".to_string()]);

    s.next_slide();
    let out = s.step(0.0, JsValue::NULL).unwrap();
    assert!(event_types(&out).contains(&"slideChanged".to_string()));
    assert_eq!(s.current_index(), 1);

    let inputs = js_sys::JSON::parse(r#"{"events": [], "commands": [{"type": "goTo", "index": 9}]}"#)
        .unwrap();
    s.step(0.0, inputs).unwrap();
    assert_eq!(s.current_index(), 3);
    assert!(!s.can_go_next());
}

/// it should consume navigation keys and ignore others
#[wasm_bindgen_test]
fn keys_are_mapped() {
    let mut s = WasmSlider::new(JsValue::UNDEFINED, 3, 800.0).unwrap();
    assert!(s.key("ArrowRight"));
    assert_eq!(s.current_index(), 1);
    assert!(!s.key("Enter"));
}

/// it should load items the visibility callback reports as visible
#[wasm_bindgen_test]
fn poll_visibility_uses_callback() {
    let mut s = WasmSlider::from_json(r#"{"lazyLoad": {"enabled": true}}"#, 8, 800.0).unwrap();
    for i in 0..8 {
        s.render_slide(i).unwrap();
    }
    let cb = Function::new_with_args("index, margin", "return index === 6 && margin === 200;");
    assert_eq!(s.poll_visibility(cb), vec![6]);
}

#[wasm_bindgen_test]
fn rejects_bad_config() {
    let bad = js_sys::JSON::parse(r#"{"slidesToShow": "three"}"#).unwrap();
    assert!(WasmSlider::new(bad, 3, 800.0).is_err());
}

/// it should stop only the run a handle came from
#[wasm_bindgen_test]
fn stop_autoplay_by_handle() {
    let mut s = WasmSlider::new(JsValue::UNDEFINED, 4, 1024.0).unwrap();
    let first = s.start_autoplay().unwrap();
    let second = s.start_autoplay().unwrap();
    assert!(!s.stop_autoplay_handle(first));
    assert!(s.is_autoplay_running());
    assert!(s.stop_autoplay_handle(second));
    assert!(!s.is_autoplay_running());
}

/// it should expose arrow and bullet labels for the current index
#[wasm_bindgen_test]
fn control_labels() {
    let mut s = WasmSlider::from_json(r#"{"loop": false}"#, 3, 1024.0).unwrap();
    assert_eq!(s.prev_label(), "This is the first slide");
    s.go_to_slide(2);
    assert_eq!(s.next_label(), "This is the last slide");
    assert_eq!(s.bullet_label(1), "Go to slide 2");
}
