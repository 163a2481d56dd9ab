use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use slidekit_api_core::StyleHandle;
use slidekit_carousel_core::{
    register_base_styles, Carousel, CarouselConfig, CarouselEvent, Geometry, HostEvent,
};

/// One carousel on the page. The host owns the frame loop: after any call,
/// request animation frames and call `frame(dt)` while `needs_frame()` is true.
#[wasm_bindgen]
pub struct SlideKitCarousel {
    core: Carousel,
    styles: Option<StyleHandle<'static>>,
    /// At most one index-change subscriber per carousel.
    listener: Option<Function>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn geometry_from(value: JsValue, what: &str) -> Result<Geometry, JsError> {
    if jsvalue_is_undefined_or_null(&value) {
        return Err(JsError::new(&format!("{what}: geometry is null/undefined")));
    }
    swb::from_value(value).map_err(|e| JsError::new(&format!("{what}: geometry error: {e}")))
}

#[wasm_bindgen]
impl SlideKitCarousel {
    /// Create a carousel. Pass a config object (camelCase or snake_case keys)
    /// or undefined/null for defaults.
    /// Example:
    ///   new SlideKitCarousel({ infinite: false, gap: 16 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SlideKitCarousel, JsError> {
        console_error_panic_hook::set_once();

        let cfg = if jsvalue_is_undefined_or_null(&config) {
            CarouselConfig::default()
        } else {
            let raw: serde_json::Value = swb::from_value(config)
                .map_err(|e| JsError::new(&format!("config error: {e}")))?;
            CarouselConfig::from_json_value(raw)
                .map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(SlideKitCarousel {
            core: Carousel::new(cfg),
            styles: None,
            listener: None,
        })
    }

    /// Register the shared base stylesheet. Returns the css when the host must
    /// inject it (first carousel on the page), otherwise undefined.
    #[wasm_bindgen(js_name = acquire_styles)]
    pub fn acquire_styles(&mut self) -> Option<String> {
        if self.styles.is_some() {
            return None;
        }
        let handle = register_base_styles();
        let css = handle
            .is_first()
            .then(|| slidekit_carousel_core::BASE_CSS.to_string());
        self.styles = Some(handle);
        css
    }

    /// Release the base stylesheet. Returns true when the host must remove it.
    #[wasm_bindgen(js_name = release_styles)]
    pub fn release_styles(&mut self) -> bool {
        self.styles.take().map(StyleHandle::release).unwrap_or(false)
    }

    #[wasm_bindgen]
    pub fn attach(&mut self, geometry: JsValue) -> Result<(), JsError> {
        let geom = geometry_from(geometry, "attach")?;
        self.core.attach(geom);
        Ok(())
    }

    /// Host resized or the slide set changed: pass a fresh geometry snapshot.
    #[wasm_bindgen]
    pub fn remeasure(&mut self, geometry: JsValue) -> Result<(), JsError> {
        let geom = geometry_from(geometry, "remeasure")?;
        self.core.remeasure(geom);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn detach(&mut self) {
        self.core.detach();
        self.listener = None;
    }

    #[wasm_bindgen(js_name = pointer_down)]
    pub fn pointer_down(&mut self, x: f32) -> bool {
        self.core.begin_drag(x)
    }

    #[wasm_bindgen(js_name = pointer_move)]
    pub fn pointer_move(&mut self, x: f32) {
        self.core.update_drag(x);
    }

    #[wasm_bindgen(js_name = pointer_up)]
    pub fn pointer_up(&mut self) {
        self.core.end_drag();
    }

    #[wasm_bindgen]
    pub fn next(&mut self) {
        self.core.next();
    }

    #[wasm_bindgen]
    pub fn prev(&mut self) {
        self.core.prev();
    }

    #[wasm_bindgen(js_name = go_to)]
    pub fn go_to(&mut self, index: i32) {
        self.core.go_to(index as i64);
    }

    /// Dispatch a HostEvent JSON object, e.g. `{ type: "pointer_move", x: 120 }`.
    #[wasm_bindgen]
    pub fn dispatch(&mut self, event: JsValue) -> Result<(), JsError> {
        let ev: HostEvent =
            swb::from_value(event).map_err(|e| JsError::new(&format!("event error: {e}")))?;
        if matches!(ev, HostEvent::Detach) {
            self.listener = None;
        }
        self.core.handle(ev);
        Ok(())
    }

    /// Subscribe `callback(index)` to index changes, replacing any previous
    /// subscriber. Pass undefined to unsubscribe.
    #[wasm_bindgen(js_name = on_index_change)]
    pub fn on_index_change(&mut self, callback: Option<Function>) {
        self.listener = callback;
    }

    #[wasm_bindgen(js_name = needs_frame)]
    pub fn needs_frame(&self) -> bool {
        self.core.needs_frame()
    }

    #[wasm_bindgen(js_name = current_index)]
    pub fn current_index(&self) -> u32 {
        self.core.current_index()
    }

    #[wasm_bindgen]
    pub fn controls(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.controls())
            .map_err(|e| JsError::new(&format!("controls error: {e}")))
    }

    /// Advance one frame by dt (seconds). Returns Outputs JSON
    /// (`{ transforms, events, running }`) and notifies the index subscriber.
    #[wasm_bindgen]
    pub fn frame(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let out = self.core.frame(dt);
        let value =
            swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))?;
        if let Some(cb) = &self.listener {
            for ev in &out.events {
                if let CarouselEvent::IndexChanged { index } = ev {
                    // A throwing subscriber must not stall the frame loop.
                    if let Err(e) = cb.call1(&JsValue::UNDEFINED, &JsValue::from(*index)) {
                        log::warn!("index listener threw: {e:?}");
                    }
                }
            }
        }
        Ok(value)
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
