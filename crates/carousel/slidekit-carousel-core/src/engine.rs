//! Engine: owns one carousel's state and wires measurement, interaction,
//! scheduling and layout together.
//!
//! Methods:
//! - attach / remeasure / detach (host lifecycle)
//! - begin_drag / update_drag / end_drag, step / next / prev / go_to (input)
//! - frame (one animation frame → Outputs)

use crate::config::CarouselConfig;
use crate::controls::{self, Controls};
use crate::geometry::Geometry;
use crate::inputs::HostEvent;
use crate::interaction::Outcome;
use crate::layout::{self, Layout, LayoutCache};
use crate::measure::{measure, Measurement};
use crate::outputs::{CarouselEvent, Outputs};
use crate::scheduler::{Scheduler, Tick};
use crate::state::CarouselState;

#[derive(Debug)]
pub struct Carousel {
    cfg: CarouselConfig,
    state: CarouselState,
    measurement: Measurement,
    geometry: Option<Geometry>,
    scheduler: Scheduler,
    cache: LayoutCache,
    attached: bool,
    /// Events raised by input/lifecycle calls, delivered with the next frame.
    pending: Vec<CarouselEvent>,
    outputs: Outputs,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl Carousel {
    pub fn new(cfg: CarouselConfig) -> Self {
        Self {
            cfg: cfg.sanitized(),
            state: CarouselState::default(),
            measurement: Measurement::default(),
            geometry: None,
            scheduler: Scheduler::new(),
            cache: LayoutCache::default(),
            attached: false,
            pending: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The host should keep requesting frames while this is true.
    pub fn needs_frame(&self) -> bool {
        self.attached && self.scheduler.is_running()
    }

    pub fn current_index(&self) -> u32 {
        self.state.index()
    }

    pub fn controls(&self) -> Controls {
        controls::resolve(self.cfg.controls_mode, &self.state)
    }

    /// Replace the configuration; re-measures against the last geometry.
    pub fn set_config(&mut self, cfg: CarouselConfig) {
        self.cfg = cfg.sanitized();
        if let Some(geom) = self.geometry.take() {
            self.remeasure(geom);
        }
    }

    pub fn attach(&mut self, geometry: Geometry) {
        log::debug!(
            "carousel attach: {} slides, viewport {}px",
            geometry.slide_count,
            geometry.viewport_width
        );
        self.attached = true;
        self.state = CarouselState::default();
        self.measurement = Measurement::default();
        self.remeasure(geometry);
    }

    /// Re-run measurement after a host resize or a slide-set change.
    pub fn remeasure(&mut self, geometry: Geometry) {
        if !self.attached {
            self.geometry = Some(geometry);
            return;
        }
        let next = measure(&geometry, &self.cfg);
        if next.auto_height.is_some() && next.auto_height != self.measurement.auto_height {
            if let Some(height) = next.auto_height {
                self.pending.push(CarouselEvent::AutoHeight { height });
            }
        }
        self.state.apply_measurement(&next, self.cfg.infinite);
        log::debug!(
            "carousel measured: item {}px, {} visible, overflow={}, wrap={}",
            next.item_width,
            next.visible_items,
            next.can_overflow,
            self.state.wrap
        );
        self.measurement = next;
        self.geometry = Some(geometry);
        self.cache.invalidate();
        // One pass through the loop re-lays out at the new size.
        self.arm();
    }

    /// Stop the loop and drop all pending work. Frames after this do nothing.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        log::debug!("carousel detach");
        self.scheduler.stop();
        self.attached = false;
        self.state.dragging = false;
        self.state.drag = None;
        self.pending.clear();
        self.cache.invalidate();
    }

    fn arm(&mut self) {
        if self.attached && self.scheduler.arm() {
            log::debug!("carousel loop started");
            self.pending.push(CarouselEvent::LoopStarted);
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        if outcome.moved {
            self.arm();
        }
        if let Some(index) = outcome.index_changed {
            log::trace!("carousel index -> {index}");
            self.pending.push(CarouselEvent::IndexChanged { index });
        }
    }

    pub fn begin_drag(&mut self, pointer_x: f32) -> bool {
        if !self.attached {
            return false;
        }
        let started = self.state.begin_drag(pointer_x);
        if started {
            log::trace!("carousel drag start at {pointer_x}");
            // Snapping is suspended while dragging; the loop keeps current
            // tracking the finger.
            self.arm();
        }
        started
    }

    pub fn update_drag(&mut self, pointer_x: f32) {
        if self.attached && self.state.update_drag(pointer_x, &self.cfg) {
            self.arm();
        }
    }

    pub fn end_drag(&mut self) {
        if !self.attached {
            return;
        }
        let outcome = self.state.end_drag(&self.cfg);
        self.apply(outcome);
    }

    pub fn step(&mut self, delta: i32) {
        if !self.attached {
            return;
        }
        let outcome = self.state.step(delta);
        self.apply(outcome);
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    pub fn go_to(&mut self, index: i64) {
        if !self.attached {
            return;
        }
        let outcome = self.state.go_to(index);
        self.apply(outcome);
    }

    /// Dispatch one host notification.
    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::Attach { geometry } => self.attach(geometry),
            HostEvent::Resize { geometry } | HostEvent::SlidesChanged { geometry } => {
                self.remeasure(geometry)
            }
            HostEvent::PointerDown { x } => {
                self.begin_drag(x);
            }
            HostEvent::PointerMove { x } => self.update_drag(x),
            HostEvent::PointerUp | HostEvent::PointerCancel => self.end_drag(),
            HostEvent::Next => self.next(),
            HostEvent::Prev => self.prev(),
            HostEvent::GoTo { index } => self.go_to(index),
            HostEvent::Detach => self.detach(),
        }
    }

    /// Events raised since the last frame, without advancing the loop.
    pub fn take_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Lay out at the current position without advancing time.
    pub fn layout_now(&mut self) -> Layout {
        if !self.attached {
            return Layout::Skipped;
        }
        self.cache.invalidate();
        layout::compute(&self.state, self.cfg.preload_items, &mut self.cache)
    }

    /// Advance one frame by `dt` seconds.
    pub fn frame(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear();
        self.outputs.events.append(&mut self.pending);
        if !self.attached {
            return &self.outputs;
        }

        let tick = self.scheduler.advance(&mut self.state, &self.cfg, dt);
        if tick == Tick::Idle {
            return &self.outputs;
        }

        if let Layout::Applied(transforms) =
            layout::compute(&self.state, self.cfg.preload_items, &mut self.cache)
        {
            self.outputs.transforms = transforms;
        }

        match tick {
            Tick::Running => self.outputs.running = true,
            Tick::Settled => {
                let index = self.state.index();
                log::debug!(
                    "carousel settled at index {index} after {} frames",
                    self.scheduler.frames()
                );
                self.outputs.push_event(CarouselEvent::Settled { index });
                self.outputs.push_event(CarouselEvent::LoopStopped);
            }
            Tick::Idle => {}
        }
        &self.outputs
    }

    /// Run frames of `dt` until the loop stops or `max_frames` elapse.
    /// Returns the number of frames run.
    pub fn run_until_settled(&mut self, dt: f32, max_frames: usize) -> usize {
        let mut frames = 0;
        while self.needs_frame() && frames < max_frames {
            self.frame(dt);
            frames += 1;
        }
        frames
    }
}
