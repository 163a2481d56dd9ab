//! Carousel configuration.

use serde::{Deserialize, Serialize};
use slidekit_api_core::{json::config_from_value, parse_config_json, ConfigError};

pub const DEFAULT_LERP_FACTOR: f32 = 0.1;
pub const DEFAULT_SNAP_STRENGTH: f32 = 0.2;
pub const DEFAULT_DRAG_GAIN: f32 = 1.0;
pub const DEFAULT_PRELOAD_ITEMS: u32 = 1;

/// Visibility policy for the prev/next affordances.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlsMode {
    /// Show controls only when the slides overflow the viewport.
    #[default]
    Auto,
    Always,
    Never,
}

/// Options a host sets on a carousel. Every field is independently optional in
/// JSON; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Wrap slides around when content overflows.
    pub infinite: bool,
    /// Snap the target to whole slide indices.
    pub snap: bool,
    /// Damping time constant in seconds; larger settles slower.
    pub lerp_factor: f32,
    /// Per-frame fraction of the distance to the nearest integer target.
    pub snap_strength: f32,
    /// Multiplier from dragged slide widths to index units.
    pub drag_gain: f32,
    /// Spacing between slides in px.
    pub gap: f32,
    /// Slides laid out beyond each viewport edge in wrap mode.
    pub preload_items: u32,
    /// Fixed number of slides per viewport. Takes precedence over `slide_width`.
    pub columns: Option<u32>,
    /// Fixed slide width in px (gap excluded).
    pub slide_width: Option<f32>,
    pub controls_mode: ControlsMode,
    /// Report the tallest slide so the host can size itself.
    pub auto_height: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            infinite: true,
            snap: true,
            lerp_factor: DEFAULT_LERP_FACTOR,
            snap_strength: DEFAULT_SNAP_STRENGTH,
            drag_gain: DEFAULT_DRAG_GAIN,
            gap: 0.0,
            preload_items: DEFAULT_PRELOAD_ITEMS,
            columns: None,
            slide_width: None,
            controls_mode: ControlsMode::Auto,
            auto_height: false,
        }
    }
}

impl CarouselConfig {
    /// Parse host JSON (camelCase or snake_case keys) and sanitize it.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: CarouselConfig = parse_config_json(text)?;
        Ok(cfg.sanitized())
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let cfg: CarouselConfig = config_from_value(value)?;
        Ok(cfg.sanitized())
    }

    /// Clamp malformed numbers into a range the engine cannot diverge on.
    pub fn sanitized(mut self) -> Self {
        if !(self.lerp_factor.is_finite() && self.lerp_factor > 0.0) {
            log::warn!(
                "carousel config: lerp_factor {} replaced by {DEFAULT_LERP_FACTOR}",
                self.lerp_factor
            );
            self.lerp_factor = DEFAULT_LERP_FACTOR;
        }
        if !self.snap_strength.is_finite() {
            log::warn!("carousel config: non-finite snap_strength replaced");
            self.snap_strength = DEFAULT_SNAP_STRENGTH;
        }
        self.snap_strength = self.snap_strength.clamp(0.0, 1.0);
        if !self.drag_gain.is_finite() {
            log::warn!("carousel config: non-finite drag_gain replaced");
            self.drag_gain = DEFAULT_DRAG_GAIN;
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            log::warn!("carousel config: gap {} clamped to 0", self.gap);
            self.gap = 0.0;
        }
        if self.columns == Some(0) {
            log::warn!("carousel config: columns = 0 ignored");
            self.columns = None;
        }
        if let Some(w) = self.slide_width {
            if !(w.is_finite() && w > 0.0) {
                log::warn!("carousel config: slide_width {w} ignored");
                self.slide_width = None;
            }
        }
        self
    }
}
