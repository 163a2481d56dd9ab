//! Animation scheduler: the per-frame correction loop.
//!
//! Each frame pulls a free-floating target toward the nearest whole index
//! (when snapping), moves `current` toward `target` with frame-rate independent
//! exponential damping, and stops the loop once the two agree.

use crate::config::CarouselConfig;
use crate::state::CarouselState;

/// Distance in slide units below which motion counts as settled.
pub const SETTLE_EPSILON: f32 = 0.0015;

/// Result of advancing one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Loop was not running; nothing changed.
    Idle,
    /// Still moving; lay out and schedule another frame.
    Running,
    /// Converged this frame; lay out once more, the loop has stopped.
    Settled,
}

/// Fraction of the remaining distance covered in `dt` seconds for a damping
/// time constant `lerp_factor`: `1 - e^(-dt / lerp_factor)`.
#[inline]
pub fn damping_alpha(dt: f32, lerp_factor: f32) -> f32 {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let lambda = 1.0 / lerp_factor.max(f32::EPSILON);
    1.0 - (-lambda * dt).exp()
}

#[derive(Debug, Default)]
pub struct Scheduler {
    running: bool,
    frames: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames advanced since the loop last started.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start the loop if idle. Returns true when it was idle.
    pub fn arm(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.frames = 0;
        true
    }

    /// Stop without settling (teardown). Returns true when it was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub fn advance(&mut self, state: &mut CarouselState, cfg: &CarouselConfig, dt: f32) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.frames += 1;

        if cfg.snap && !state.dragging {
            let nearest = state.target.round();
            state.target += (nearest - state.target) * cfg.snap_strength;
        }

        let alpha = damping_alpha(dt, cfg.lerp_factor);
        state.current += (state.target - state.current) * alpha;

        if !state.dragging && (state.current - state.target).abs() < SETTLE_EPSILON {
            if cfg.snap {
                let settled = state.target.round();
                state.target = settled;
                state.current = settled;
            }
            state.normalize_wrap();
            self.running = false;
            return Tick::Settled;
        }
        Tick::Running
    }
}
