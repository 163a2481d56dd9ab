//! Motion state owned by one carousel.

use serde::{Deserialize, Serialize};

use crate::measure::Measurement;

/// Pointer bookkeeping for an active drag.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragOrigin {
    pub pointer_x: f32,
    pub target: f32,
    /// Selected index when the drag began; release compares against it.
    pub index: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    /// Animated scroll position in slide-index units.
    pub current: f32,
    /// Desired scroll position in slide-index units.
    pub target: f32,
    pub item_width: f32,
    pub visible_items: u32,
    pub max_scroll: f32,
    pub can_overflow: bool,
    pub dragging: bool,
    pub slide_count: u32,
    /// Wrap mode in effect (`infinite` and overflow). Cached at measurement time.
    pub wrap: bool,
    pub drag: Option<DragOrigin>,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            item_width: 0.0,
            visible_items: 1,
            max_scroll: 0.0,
            can_overflow: false,
            dragging: false,
            slide_count: 0,
            wrap: false,
            drag: None,
        }
    }
}

impl CarouselState {
    /// Apply a measurement in one step and re-validate positions against it.
    ///
    /// - switching between wrap and bounded mode re-expresses the selected
    ///   index in the new mode's direction and cancels a drag,
    /// - losing overflow resets to the first slide and cancels a drag,
    /// - bounded mode clamps into `[max_scroll, 0]`.
    pub fn apply_measurement(&mut self, m: &Measurement, infinite: bool) {
        let wrap = infinite && m.can_overflow;
        if self.can_overflow && m.can_overflow && wrap != self.wrap {
            let index = self.index() as f32;
            let lag = self.current - self.target;
            self.target = if wrap { index } else { -index };
            self.current = self.target - lag;
            self.dragging = false;
            self.drag = None;
        }

        self.item_width = m.item_width;
        self.visible_items = m.visible_items.max(1);
        self.max_scroll = m.max_scroll;
        self.can_overflow = m.can_overflow;
        self.slide_count = m.slide_count;
        self.wrap = wrap;

        if !m.can_overflow {
            self.current = 0.0;
            self.target = 0.0;
            self.dragging = false;
            self.drag = None;
        } else if !wrap {
            self.target = self.clamp_bounded(self.target);
            self.current = self.clamp_bounded(self.current);
        }
    }

    #[inline]
    pub fn clamp_bounded(&self, v: f32) -> f32 {
        v.clamp(self.max_scroll.min(0.0), 0.0)
    }

    /// Shift wrap-mode positions by whole turns so the target lies in
    /// `[0, slide_count)`. Layout and index are unaffected; f32 precision is.
    pub fn normalize_wrap(&mut self) {
        if !self.wrap || self.slide_count == 0 || !self.target.is_finite() {
            return;
        }
        let n = self.slide_count as f32;
        let turns = (self.target.round() / n).floor();
        if turns == 0.0 {
            return;
        }
        let shift = turns * n;
        self.target -= shift;
        self.current -= shift;
        if let Some(origin) = self.drag.as_mut() {
            origin.target -= shift;
        }
    }

    /// Selected slide for a given position.
    pub fn index_for(&self, position: f32) -> u32 {
        let n = self.slide_count as i64;
        if n == 0 || !position.is_finite() {
            return 0;
        }
        let r = position.round() as i64;
        if self.wrap {
            r.rem_euclid(n) as u32
        } else {
            (-r).clamp(0, n - 1) as u32
        }
    }

    /// Selected slide according to the target.
    pub fn index(&self) -> u32 {
        self.index_for(self.target)
    }
}
