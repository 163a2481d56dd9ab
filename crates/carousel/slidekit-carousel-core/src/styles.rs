//! Base stylesheet shared by every carousel on a page.

use slidekit_api_core::{StyleHandle, StyleRegistry};

pub const BASE_STYLE_KEY: &str = "slidekit-carousel-base";

pub const BASE_CSS: &str = "\
.slidekit-carousel{position:relative;overflow:hidden;touch-action:pan-y;user-select:none;}\
.slidekit-carousel__slide{position:absolute;top:0;left:0;will-change:transform;}\
.slidekit-carousel__slide[data-hidden]{visibility:hidden;}";

/// Register the base stylesheet in the process-wide registry. The handle
/// releases the registration when dropped.
pub fn register_base_styles() -> StyleHandle<'static> {
    StyleRegistry::global().handle(BASE_STYLE_KEY, BASE_CSS)
}
