//! Geometry snapshot read from the host surface.
//!
//! The host measures its elements and hands the numbers over as a plain value;
//! nothing in the engine reads layout on its own.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Inner width of the carousel viewport in px.
    pub viewport_width: f32,
    pub slide_count: u32,
    /// Measured width of the first slide, used when no explicit sizing is set.
    pub first_slide_width: Option<f32>,
    /// Measured slide heights, consulted for auto-height.
    pub slide_heights: Vec<f32>,
}

impl Geometry {
    pub fn new(viewport_width: f32, slide_count: u32) -> Self {
        Self {
            viewport_width,
            slide_count,
            ..Self::default()
        }
    }

    pub fn with_first_slide_width(mut self, width: f32) -> Self {
        self.first_slide_width = Some(width);
        self
    }

    pub fn with_slide_heights(mut self, heights: Vec<f32>) -> Self {
        self.slide_heights = heights;
        self
    }

    /// Viewport width with non-finite or negative readings treated as 0.
    pub fn viewport(&self) -> f32 {
        if self.viewport_width.is_finite() {
            self.viewport_width.max(0.0)
        } else {
            0.0
        }
    }

    pub fn tallest_slide(&self) -> Option<f32> {
        self.slide_heights
            .iter()
            .copied()
            .filter(|h| h.is_finite() && *h >= 0.0)
            .fold(None, |acc: Option<f32>, h| Some(acc.map_or(h, |a| a.max(h))))
    }
}
