use slidekit_carousel_core::{
    layout::{self, Layout, LayoutCache},
    Carousel, CarouselConfig, Geometry, SETTLE_EPSILON,
};

/// Small deterministic generator so property runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }

    fn unit(&mut self) -> f32 {
        (self.next() % 10_000) as f32 / 10_000.0
    }
}

fn carousel(count: u32, infinite: bool) -> Carousel {
    let mut c = Carousel::new(CarouselConfig {
        infinite,
        ..CarouselConfig::default()
    });
    c.attach(Geometry::new(120.0, count));
    c.run_until_settled(1.0 / 60.0, 1_000);
    c.take_events();
    c
}

fn random_op(c: &mut Carousel, rng: &mut Lcg) {
    match rng.below(7) {
        0 => c.next(),
        1 => c.prev(),
        2 => c.go_to(rng.below(20) as i64 - 10),
        3 => {
            c.begin_drag(rng.unit() * 600.0);
        }
        4 => c.update_drag(rng.unit() * 1200.0 - 300.0),
        5 => c.end_drag(),
        _ => {
            let dt = rng.unit() * 0.05;
            c.frame(dt);
        }
    }
}

#[test]
fn bounded_positions_stay_clamped() {
    let mut rng = Lcg(7);
    for count in [2u32, 3, 6] {
        let mut c = carousel(count, false);
        let floor = -((count - 1) as f32);
        for _ in 0..2_000 {
            random_op(&mut c, &mut rng);
            let s = c.state();
            assert!(s.target <= 0.0 && s.target >= floor, "target {}", s.target);
            assert!(s.current <= 0.0 && s.current >= floor, "current {}", s.current);
        }
    }
}

#[test]
fn wrap_layout_is_congruent_every_frame() {
    let mut rng = Lcg(99);
    let mut c = carousel(5, true);
    let n = 5.0f32;
    for _ in 0..1_500 {
        random_op(&mut c, &mut rng);
        let transforms = c.frame(1.0 / 120.0).transforms.clone();
        let current = c.state().current;
        for t in &transforms {
            let raw = t.index as f32 - current;
            let k = (t.offset - raw) / n;
            assert!(
                (k - k.round()).abs() < 1e-3,
                "slide {} offset {} not congruent to {}",
                t.index,
                t.offset,
                raw
            );
        }
    }
}

#[test]
fn wrap_layout_assigns_distinct_positions() {
    let mut cache = LayoutCache::default();
    let mut c = carousel(4, true);
    c.go_to(3);
    for _ in 0..30 {
        c.frame(1.0 / 60.0);
        let Layout::Applied(mut slides) =
            layout::compute(c.state(), c.config().preload_items, &mut cache)
        else {
            panic!("expected a layout");
        };
        slides.sort_by(|a, b| a.offset.partial_cmp(&b.offset).unwrap());
        for pair in slides.windows(2) {
            assert!((pair[1].offset - pair[0].offset - 1.0).abs() < 1e-3);
        }
    }
}

#[test]
fn any_target_converges_with_uneven_frames() {
    let mut rng = Lcg(3);
    let mut c = carousel(7, true);
    for _ in 0..25 {
        c.go_to(rng.below(7) as i64);
        if rng.below(2) == 0 {
            c.next();
        }
        let mut frames = 0;
        while c.needs_frame() {
            let dt = 0.004 + rng.unit() * 0.04;
            c.frame(dt);
            frames += 1;
            assert!(frames < 10_000);
        }
        let s = c.state();
        assert!((s.current - s.target).abs() < SETTLE_EPSILON);
        assert_eq!(s.target, s.target.round());
    }
}

#[test]
fn settled_engine_ignores_extra_frames() {
    let mut c = carousel(5, true);
    c.next();
    c.run_until_settled(1.0 / 60.0, 5_000);
    let settled = c.state().clone();
    for _ in 0..10 {
        let out = c.frame(1.0 / 60.0);
        assert!(out.is_empty() && !out.running);
    }
    assert_eq!(c.state(), &settled);
    assert!(!c.needs_frame());
}

#[test]
fn step_forward_then_back_round_trips() {
    for infinite in [true, false] {
        let mut c = carousel(5, infinite);
        c.go_to(2);
        c.run_until_settled(1.0 / 60.0, 5_000);
        let start = c.state().target;
        c.next();
        c.prev();
        c.run_until_settled(1.0 / 60.0, 5_000);
        assert_eq!(c.state().target, start);
        assert_eq!(c.state().current, start);
    }
}

#[test]
fn drag_without_overflow_consumes_nothing() {
    let mut c = Carousel::default();
    c.attach(Geometry::new(500.0, 2).with_first_slide_width(100.0));
    c.run_until_settled(1.0 / 60.0, 100);
    c.take_events();
    assert!(!c.begin_drag(10.0));
    c.update_drag(300.0);
    c.end_drag();
    c.next();
    assert!(c.take_events().is_empty());
    assert!(!c.needs_frame());
    assert_eq!(c.state().target, 0.0);
}

#[test]
fn unmeasured_width_skips_layout_but_keeps_running() {
    let mut c = Carousel::default();
    c.attach(Geometry::new(0.0, 3));
    let out = c.frame(1.0 / 60.0);
    assert!(out.transforms.is_empty());
    c.remeasure(Geometry::new(100.0, 3));
    c.next();
    assert!(c.needs_frame());
    let out = c.frame(1.0 / 60.0);
    assert_eq!(out.transforms.len(), 3);
}
