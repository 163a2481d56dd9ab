#![cfg(target_arch = "wasm32")]
use serde_json::json;
use serde_wasm_bindgen as swb;
use slidekit_carousel_wasm::{abi_version, SlideKitCarousel};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn geometry(width: f32, count: u32) -> JsValue {
    swb::to_value(&json!({ "viewport_width": width, "slide_count": count })).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults_and_camel_config() {
    assert!(SlideKitCarousel::new(JsValue::UNDEFINED).is_ok());
    let cfg = swb::to_value(&json!({ "infinite": false, "lerpFactor": 0.2 })).unwrap();
    assert!(SlideKitCarousel::new(cfg).is_ok());
    let bad = swb::to_value(&json!({ "controlsMode": "sometimes" })).unwrap();
    assert!(SlideKitCarousel::new(bad).is_err());
}

#[wasm_bindgen_test]
fn attach_step_and_settle() {
    let mut car = SlideKitCarousel::new(JsValue::NULL).unwrap();
    car.attach(geometry(100.0, 5)).unwrap();
    car.next();
    car.next();
    let mut frames = 0;
    while car.needs_frame() {
        car.frame(1.0 / 60.0).unwrap();
        frames += 1;
        assert!(frames < 5000);
    }
    assert_eq!(car.current_index(), 2);
}

#[wasm_bindgen_test]
fn dispatch_rejects_unknown_events() {
    let mut car = SlideKitCarousel::new(JsValue::NULL).unwrap();
    let ev = swb::to_value(&json!({ "type": "explode" })).unwrap();
    assert!(car.dispatch(ev).is_err());
    let ev = swb::to_value(&json!({ "type": "go_to", "index": 1 })).unwrap();
    assert!(car.dispatch(ev).is_ok());
}

#[wasm_bindgen_test]
fn styles_inject_once_per_page() {
    let mut a = SlideKitCarousel::new(JsValue::NULL).unwrap();
    let mut b = SlideKitCarousel::new(JsValue::NULL).unwrap();
    assert!(a.acquire_styles().is_some());
    assert!(b.acquire_styles().is_none());
    assert!(!a.release_styles());
    assert!(b.release_styles());
}

#[wasm_bindgen_test]
fn index_listener_receives_new_index() {
    let mut car = SlideKitCarousel::new(JsValue::NULL).unwrap();
    car.attach(geometry(100.0, 5)).unwrap();
    let cb = js_sys::Function::new_with_args("i", "globalThis.__slidekitIndex = i;");
    car.on_index_change(Some(cb));
    car.next();
    car.frame(1.0 / 60.0).unwrap();
    let seen = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("__slidekitIndex"))
        .unwrap();
    assert_eq!(seen.as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn throwing_listener_does_not_break_frame() {
    let mut car = SlideKitCarousel::new(JsValue::NULL).unwrap();
    car.attach(geometry(100.0, 5)).unwrap();
    car.on_index_change(Some(js_sys::Function::new_no_args(
        "throw new Error('boom')",
    )));
    car.next();
    assert!(car.frame(1.0 / 60.0).is_ok());
    let mut frames = 0;
    while car.needs_frame() {
        assert!(car.frame(1.0 / 60.0).is_ok());
        frames += 1;
        assert!(frames < 5000);
    }
    assert_eq!(car.current_index(), 1);
}
