#![cfg(target_arch = "wasm32")]
use serde_json::json;
use serde_wasm_bindgen as swb;
use slidekit_typewriter_wasm::SlideKitTypewriter;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn types_from_camel_config() {
    let cfg = swb::to_value(&json!({ "strings": ["ok"], "typeInterval": 0.1, "looping": false }))
        .unwrap();
    let mut tw = SlideKitTypewriter::new(cfg).unwrap();
    tw.tick(0.1).unwrap();
    assert_eq!(tw.visible_text(), "o");
    tw.tick(0.1).unwrap();
    assert_eq!(tw.visible_text(), "ok");
    assert!(tw.is_done());
}

#[wasm_bindgen_test]
fn defaults_are_done_without_strings() {
    let tw = SlideKitTypewriter::new(JsValue::UNDEFINED).unwrap();
    assert!(tw.is_done());
}
