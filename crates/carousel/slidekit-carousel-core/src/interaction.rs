//! Interaction controller: pointer drags and discrete navigation mutate `target`.
//!
//! Every operation degrades to a no-op on invalid input (no overflow, no
//! slides, non-finite pointer coordinates). The engine re-arms the scheduler
//! whenever an operation reports that the target moved.

use crate::config::CarouselConfig;
use crate::state::{CarouselState, DragOrigin};

/// What an interaction did to the state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Target (or drag state) changed; the animation loop must run.
    pub moved: bool,
    /// The selected index changed to this value.
    pub index_changed: Option<u32>,
}

impl Outcome {
    const NONE: Outcome = Outcome {
        moved: false,
        index_changed: None,
    };

    fn moved(before: u32, after: u32) -> Self {
        Outcome {
            moved: true,
            index_changed: (before != after).then_some(after),
        }
    }
}

impl CarouselState {
    pub fn begin_drag(&mut self, pointer_x: f32) -> bool {
        if !self.can_overflow || !pointer_x.is_finite() {
            return false;
        }
        self.dragging = true;
        self.drag = Some(DragOrigin {
            pointer_x,
            target: self.target,
            index: self.index(),
        });
        true
    }

    pub fn update_drag(&mut self, pointer_x: f32, cfg: &CarouselConfig) -> bool {
        let Some(origin) = self.drag.filter(|_| self.dragging) else {
            return false;
        };
        if !pointer_x.is_finite() {
            return false;
        }
        let units = (pointer_x - origin.pointer_x) / self.item_width.max(1.0) * cfg.drag_gain;
        let next = if self.wrap {
            origin.target - units
        } else {
            self.clamp_bounded(origin.target + units)
        };
        if !next.is_finite() || next == self.target {
            return false;
        }
        self.target = next;
        true
    }

    pub fn end_drag(&mut self, cfg: &CarouselConfig) -> Outcome {
        if !self.dragging {
            return Outcome::NONE;
        }
        let before = self.drag.map(|d| d.index).unwrap_or_else(|| self.index());
        self.dragging = false;
        self.drag = None;
        if cfg.snap {
            self.target = self.target.round();
            if !self.wrap {
                self.target = self.clamp_bounded(self.target);
            }
        }
        Outcome::moved(before, self.index())
    }

    /// Move by `delta` slides. Wrap mode advances the target, bounded mode
    /// retreats it (the viewport moves left through content).
    pub fn step(&mut self, delta: i32) -> Outcome {
        if !self.can_overflow || delta == 0 {
            return Outcome::NONE;
        }
        self.normalize_wrap();
        let before = self.index();
        let direction = if self.wrap { 1.0 } else { -1.0 };
        let mut next = self.target.round() + direction * delta as f32;
        if !self.wrap {
            next = self.clamp_bounded(next);
        }
        if next == self.target {
            return Outcome::NONE;
        }
        self.target = next;
        Outcome::moved(before, self.index())
    }

    /// Jump to a slide. Indices wrap modulo the slide count; the target is set
    /// to that wrapped index (negated in bounded mode).
    pub fn go_to(&mut self, index: i64) -> Outcome {
        let n = self.slide_count as i64;
        if n == 0 {
            return Outcome::NONE;
        }
        let wanted = index.rem_euclid(n) as f32;
        let before = self.index();
        let next = if self.wrap {
            wanted
        } else {
            self.clamp_bounded(-wanted)
        };
        if next == self.target {
            return Outcome::NONE;
        }
        self.target = next;
        Outcome::moved(before, self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Measurement;

    fn state(count: u32, wrap: bool) -> CarouselState {
        let mut s = CarouselState::default();
        s.apply_measurement(
            &Measurement {
                item_width: 100.0,
                visible_items: 1,
                can_overflow: true,
                max_scroll: -((count - 1) as f32),
                slide_count: count,
                auto_height: None,
            },
            wrap,
        );
        s
    }

    #[test]
    fn drag_needs_overflow() {
        let mut s = CarouselState::default();
        assert!(!s.begin_drag(10.0));
        assert!(!s.dragging);
        assert!(s.drag.is_none());
    }

    #[test]
    fn drag_direction_differs_between_modes() {
        let cfg = CarouselConfig::default();
        let mut wrap = state(5, true);
        wrap.begin_drag(300.0);
        assert!(wrap.update_drag(250.0, &cfg));
        assert!((wrap.target - 0.5).abs() < 1e-6);

        let mut bounded = state(5, false);
        bounded.begin_drag(300.0);
        assert!(bounded.update_drag(250.0, &cfg));
        assert!((bounded.target + 0.5).abs() < 1e-6);
        // pulling the other way is clamped at the first slide
        bounded.update_drag(900.0, &cfg);
        assert_eq!(bounded.target, 0.0);
    }

    #[test]
    fn drag_gain_scales_displacement() {
        let cfg = CarouselConfig {
            drag_gain: 2.0,
            ..CarouselConfig::default()
        };
        let mut s = state(5, true);
        s.begin_drag(0.0);
        s.update_drag(-100.0, &cfg);
        assert!((s.target - 2.0).abs() < 1e-6);
    }

    #[test]
    fn release_snaps_and_reports_index() {
        let cfg = CarouselConfig::default();
        let mut s = state(5, true);
        s.begin_drag(0.0);
        s.update_drag(-160.0, &cfg);
        let out = s.end_drag(&cfg);
        assert!(!s.dragging);
        assert_eq!(s.target, 2.0);
        assert_eq!(out.index_changed, Some(2));

        s.begin_drag(0.0);
        s.update_drag(-20.0, &cfg);
        let out = s.end_drag(&cfg);
        assert_eq!(s.target, 2.0);
        assert!(out.moved);
        assert_eq!(out.index_changed, None);
    }

    #[test]
    fn step_uses_mode_direction_and_clamps() {
        let mut s = state(3, false);
        assert_eq!(s.step(-1), Outcome::NONE);
        assert_eq!(s.target, 0.0);
        assert_eq!(s.step(1).index_changed, Some(1));
        assert_eq!(s.target, -1.0);
        s.step(1);
        s.step(1);
        assert_eq!(s.target, -2.0);

        let mut w = state(5, true);
        for _ in 0..3 {
            w.step(1);
        }
        assert_eq!(w.target, 3.0);
    }

    #[test]
    fn go_to_sets_absolute_wrapped_index() {
        let mut s = state(5, true);
        s.target = 7.0; // index 2
        let out = s.go_to(4);
        assert_eq!(s.target, 4.0);
        assert_eq!(out.index_changed, Some(4));
        assert_eq!(s.go_to(-1), Outcome::NONE);
        assert_eq!(s.go_to(9), Outcome::NONE);
        let out = s.go_to(-5);
        assert_eq!(s.target, 0.0);
        assert_eq!(out.index_changed, Some(0));
    }

    #[test]
    fn go_to_without_overflow_still_selects() {
        let mut s = CarouselState::default();
        s.apply_measurement(
            &Measurement {
                item_width: 100.0,
                visible_items: 3,
                can_overflow: false,
                max_scroll: -2.0,
                slide_count: 3,
                auto_height: None,
            },
            true,
        );
        let out = s.go_to(2);
        assert!(!s.wrap);
        assert_eq!(s.target, -2.0);
        assert_eq!(out.index_changed, Some(2));
        assert!(out.moved);
    }

    #[test]
    fn step_far_from_origin_keeps_moving() {
        let mut s = state(5, true);
        // Representable in f32, but adding 1 would round away.
        s.target = 20_000_002.0;
        s.current = 20_000_002.0;
        let out = s.step(1);
        assert!(out.moved);
        assert_eq!(s.target, 3.0);
        assert_eq!(s.current, 2.0);
        assert_eq!(s.index(), 3);
    }

    #[test]
    fn go_to_bounded_wraps_index() {
        let mut s = state(3, false);
        s.go_to(5);
        assert_eq!(s.target, -2.0);
        assert_eq!(s.index(), 2);
    }
}
