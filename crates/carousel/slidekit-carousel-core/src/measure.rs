//! Measurement: slide size, visible count and overflow from a geometry snapshot.

use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::geometry::Geometry;

/// Everything the controller and scheduler need to know about the layout.
/// Produced as a whole and applied to the state in one assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Width of one slide plus the gap, in px.
    pub item_width: f32,
    /// Whole slides that fit in the viewport (at least 1).
    pub visible_items: u32,
    /// Total content is wider than the viewport.
    pub can_overflow: bool,
    /// Lowest target allowed in bounded mode: `-(slide_count - 1)`.
    pub max_scroll: f32,
    pub slide_count: u32,
    /// Tallest slide in px, when auto-height is enabled and heights are known.
    pub auto_height: Option<f32>,
}

impl Default for Measurement {
    fn default() -> Self {
        Self {
            item_width: 0.0,
            visible_items: 1,
            can_overflow: false,
            max_scroll: 0.0,
            slide_count: 0,
            auto_height: None,
        }
    }
}

fn fitting_items(viewport: f32, item_width: f32) -> u32 {
    if item_width <= 0.0 {
        return 1;
    }
    let n = ((viewport + 0.5) / item_width).floor();
    if n.is_finite() && n >= 1.0 {
        n as u32
    } else {
        1
    }
}

/// Derive a [`Measurement`] from host geometry and the sizing options.
pub fn measure(geom: &Geometry, cfg: &CarouselConfig) -> Measurement {
    let viewport = geom.viewport();
    let count = geom.slide_count;
    let gap = cfg.gap.max(0.0);
    let auto_height = if cfg.auto_height {
        geom.tallest_slide()
    } else {
        None
    };

    if count == 0 {
        return Measurement {
            item_width: viewport,
            visible_items: 1,
            can_overflow: false,
            max_scroll: 0.0,
            slide_count: 0,
            auto_height,
        };
    }

    let (item_width, visible_items) = if let Some(cols) = cfg.columns.filter(|c| *c > 0) {
        let slide_px = ((viewport - gap * (cols as f32 - 1.0)) / cols as f32).max(0.0);
        (slide_px + gap, cols)
    } else {
        let slide_px = cfg
            .slide_width
            .or(geom.first_slide_width)
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(viewport);
        let item = slide_px + gap;
        (item, fitting_items(viewport + gap, item))
    };

    let content = count as f32 * item_width - gap;
    Measurement {
        item_width,
        visible_items: visible_items.max(1),
        can_overflow: item_width > 0.0 && content > viewport + 0.5,
        max_scroll: -((count - 1) as f32),
        slide_count: count,
        auto_height,
    }
}
