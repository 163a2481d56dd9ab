use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use slidekit_api_core::StyleHandle;
use slidekit_typewriter_core::{register_cursor_styles, Typewriter, TypewriterConfig, CURSOR_CSS};

#[wasm_bindgen]
pub struct SlideKitTypewriter {
    core: Typewriter,
    styles: Option<StyleHandle<'static>>,
}

#[wasm_bindgen]
impl SlideKitTypewriter {
    /// Create a typewriter from a config object, e.g.
    ///   new SlideKitTypewriter({ strings: ["hello", "world"], typeInterval: 0.06 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SlideKitTypewriter, JsError> {
        console_error_panic_hook::set_once();

        let cfg = if config.is_undefined() || config.is_null() {
            TypewriterConfig::default()
        } else {
            let raw: serde_json::Value = swb::from_value(config)
                .map_err(|e| JsError::new(&format!("config error: {e}")))?;
            TypewriterConfig::from_json_value(raw)
                .map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        Ok(SlideKitTypewriter {
            core: Typewriter::new(cfg),
            styles: None,
        })
    }

    /// Register the cursor stylesheet; returns the css when the host must inject it.
    #[wasm_bindgen(js_name = acquire_styles)]
    pub fn acquire_styles(&mut self) -> Option<String> {
        if self.styles.is_some() {
            return None;
        }
        let handle = register_cursor_styles();
        let css = handle.is_first().then(|| CURSOR_CSS.to_string());
        self.styles = Some(handle);
        css
    }

    /// Release the cursor stylesheet; returns true when the host must remove it.
    #[wasm_bindgen(js_name = release_styles)]
    pub fn release_styles(&mut self) -> bool {
        self.styles.take().map(StyleHandle::release).unwrap_or(false)
    }

    /// Advance by dt seconds. Returns the events raised, in order.
    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let events = self.core.tick(dt);
        swb::to_value(&events).map_err(|e| JsError::new(&format!("events error: {e}")))
    }

    #[wasm_bindgen(js_name = visible_text)]
    pub fn visible_text(&self) -> String {
        self.core.visible_text().to_string()
    }

    #[wasm_bindgen(js_name = cursor_visible)]
    pub fn cursor_visible(&self) -> bool {
        self.core.cursor_visible()
    }

    #[wasm_bindgen(js_name = is_done)]
    pub fn is_done(&self) -> bool {
        self.core.is_done()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.core.reset();
    }
}
