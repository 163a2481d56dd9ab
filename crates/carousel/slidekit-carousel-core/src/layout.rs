//! Per-slide placement for a given scroll position.

use serde::{Deserialize, Serialize};

use crate::state::CarouselState;

/// Where one slide goes this frame.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideTransform {
    pub index: u32,
    /// Position relative to the viewport's leading edge, in slide units.
    pub offset: f32,
    /// Same position in px (`offset * item_width`), ready for `translateX`.
    pub x: f32,
    /// Inside the rendered window; hosts may hide slides outside it.
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Layout {
    /// Nothing measurable to lay out (no slides or zero width).
    Skipped,
    /// Bounded offset identical to the last applied one; no writes needed.
    Unchanged,
    Applied(Vec<SlideTransform>),
}

/// Remembers the last bounded offset written to the host.
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
    last_offset: Option<f32>,
}

impl LayoutCache {
    pub fn invalidate(&mut self) {
        self.last_offset = None;
    }
}

/// The half-open window `[lo, hi)` in which wrapped slides are placed.
/// Shrinks symmetrically to the slide count when there are too few slides to
/// fill it, so no two slides ever share a position.
pub fn wrap_window(slide_count: u32, visible_items: u32, preload_items: u32) -> (f32, f32) {
    let n = slide_count as f32;
    let mut lo = -(preload_items as f32);
    let mut hi = visible_items as f32 + preload_items as f32;
    let width = hi - lo;
    if width > n {
        lo += (width - n) / 2.0;
        hi = lo + n;
    }
    (lo, hi)
}

/// Fold a raw relative offset into the congruent value in `[lo, lo + n)`.
#[inline]
pub fn fold_offset(raw: f32, lo: f32, n: f32) -> f32 {
    let mut pos = raw - n * ((raw - lo) / n).floor();
    if pos >= lo + n {
        pos -= n;
    } else if pos < lo {
        pos += n;
    }
    pos
}

/// Wrap-mode layout: every slide gets the position congruent to
/// `i - current` (mod slide count) that falls in the preload window.
pub fn layout_wrapped(state: &CarouselState, preload_items: u32) -> Layout {
    if state.slide_count == 0 || state.item_width <= 0.0 {
        return Layout::Skipped;
    }
    let n = state.slide_count as f32;
    let (lo, hi) = wrap_window(state.slide_count, state.visible_items, preload_items);
    let slides = (0..state.slide_count)
        .map(|i| {
            let offset = fold_offset(i as f32 - state.current, lo, n);
            SlideTransform {
                index: i,
                offset,
                x: offset * state.item_width,
                visible: offset < hi,
            }
        })
        .collect();
    Layout::Applied(slides)
}

/// Bounded-mode layout: slides sit on a strip shifted by the clamped position.
pub fn layout_bounded(state: &CarouselState, cache: &mut LayoutCache) -> Layout {
    if state.slide_count == 0 || state.item_width <= 0.0 {
        return Layout::Skipped;
    }
    let clamped = state.clamp_bounded(state.current);
    let offset_px = -clamped * state.item_width;
    if cache.last_offset == Some(offset_px) {
        return Layout::Unchanged;
    }
    cache.last_offset = Some(offset_px);
    let visible_span = state.visible_items as f32;
    let slides = (0..state.slide_count)
        .map(|i| {
            let x = i as f32 * state.item_width - offset_px;
            let offset = x / state.item_width;
            SlideTransform {
                index: i,
                offset,
                x,
                visible: offset > -1.0 && offset < visible_span,
            }
        })
        .collect();
    Layout::Applied(slides)
}

/// Lay out for whichever mode the state is in.
pub fn compute(state: &CarouselState, preload_items: u32, cache: &mut LayoutCache) -> Layout {
    if state.wrap {
        layout_wrapped(state, preload_items)
    } else {
        layout_bounded(state, cache)
    }
}
