//! The typing scheduler.
//!
//! Time is fed in with [`Typewriter::tick`]; a single tick may cross several
//! character boundaries and phase changes, so the result does not depend on
//! how the host slices time.

use serde::{Deserialize, Serialize};
use slidekit_api_core::{StyleHandle, StyleRegistry};

use crate::config::TypewriterConfig;

pub const CURSOR_STYLE_KEY: &str = "slidekit-typewriter-cursor";

pub const CURSOR_CSS: &str = "\
.slidekit-typewriter__cursor{display:inline-block;margin-left:0.05em;}\
.slidekit-typewriter__cursor[data-hidden]{opacity:0;}";

const TIME_EPSILON: f32 = 1e-6;
/// Upper bound on state transitions per tick (guards huge `dt` on looping text).
const MAX_TRANSITIONS_PER_TICK: usize = 10_000;

pub fn register_cursor_styles() -> StyleHandle<'static> {
    StyleRegistry::global().handle(CURSOR_STYLE_KEY, CURSOR_CSS)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Start delay or pause between strings.
    Waiting,
    Typing,
    Holding,
    Deleting,
    Done,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypewriterEvent {
    CharTyped { ch: char },
    CharDeleted,
    StringComplete { index: usize },
    Finished,
}

#[derive(Debug)]
pub struct Typewriter {
    cfg: TypewriterConfig,
    phase: Phase,
    index: usize,
    /// Characters of the current string on screen.
    revealed: usize,
    /// Time spent in the current step.
    elapsed: f32,
    /// Length of the current waiting phase.
    wait: f32,
    cursor_clock: f32,
}

impl Typewriter {
    pub fn new(cfg: TypewriterConfig) -> Self {
        let cfg = cfg.sanitized();
        let mut tw = Self {
            phase: Phase::Waiting,
            index: 0,
            revealed: 0,
            elapsed: 0.0,
            wait: cfg.start_delay,
            cursor_clock: 0.0,
            cfg,
        };
        if tw.cfg.strings.is_empty() {
            tw.phase = Phase::Done;
        }
        tw
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.cfg
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn string_index(&self) -> usize {
        self.index
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Back to the first string, before the start delay.
    pub fn reset(&mut self) {
        *self = Typewriter::new(std::mem::take(&mut self.cfg));
    }

    /// Revealed prefix of the current string.
    pub fn visible_text(&self) -> &str {
        let Some(s) = self.cfg.strings.get(self.index) else {
            return "";
        };
        match s.char_indices().nth(self.revealed) {
            Some((byte, _)) => &s[..byte],
            None => s,
        }
    }

    /// Cursor is solid while characters change and blinks otherwise.
    pub fn cursor_visible(&self) -> bool {
        if matches!(self.phase, Phase::Typing | Phase::Deleting) || self.cfg.cursor_blink <= 0.0 {
            return true;
        }
        (self.cursor_clock / self.cfg.cursor_blink) as u64 % 2 == 0
    }

    fn current_len(&self) -> usize {
        self.cfg
            .strings
            .get(self.index)
            .map(|s| s.chars().count())
            .unwrap_or(0)
    }

    fn step_duration(&self) -> f32 {
        match self.phase {
            Phase::Waiting => self.wait,
            Phase::Typing => self.cfg.type_interval,
            Phase::Holding => self.cfg.hold,
            Phase::Deleting => self.cfg.delete_interval,
            Phase::Done => f32::INFINITY,
        }
    }

    /// Advance by `dt` seconds and return what happened, in order.
    pub fn tick(&mut self, dt: f32) -> Vec<TypewriterEvent> {
        let mut events = Vec::new();
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.cursor_clock += dt;
        if self.cfg.cursor_blink > 0.0 {
            self.cursor_clock %= 2.0 * self.cfg.cursor_blink;
        }

        let mut budget = dt;
        let mut transitions = 0;
        while self.phase != Phase::Done {
            let need = self.step_duration() - self.elapsed;
            if budget + TIME_EPSILON < need {
                self.elapsed += budget;
                break;
            }
            budget = (budget - need.max(0.0)).max(0.0);
            self.elapsed = 0.0;
            self.transition(&mut events);
            transitions += 1;
            if transitions >= MAX_TRANSITIONS_PER_TICK {
                log::warn!("typewriter: transition cap reached in one tick; dropping remaining time");
                break;
            }
        }
        events
    }

    fn complete_string(&mut self, events: &mut Vec<TypewriterEvent>) {
        events.push(TypewriterEvent::StringComplete { index: self.index });
        let last = self.index + 1 == self.cfg.strings.len();
        if last && !self.cfg.looping {
            self.phase = Phase::Done;
            events.push(TypewriterEvent::Finished);
        } else {
            self.phase = Phase::Holding;
        }
    }

    fn next_string(&mut self) {
        self.index = (self.index + 1) % self.cfg.strings.len().max(1);
        self.revealed = 0;
        self.wait = self.cfg.pause;
        self.phase = Phase::Waiting;
    }

    fn transition(&mut self, events: &mut Vec<TypewriterEvent>) {
        match self.phase {
            Phase::Waiting => {
                self.phase = Phase::Typing;
                if self.current_len() == 0 {
                    self.complete_string(events);
                }
            }
            Phase::Typing => {
                let ch = self
                    .cfg
                    .strings
                    .get(self.index)
                    .and_then(|s| s.chars().nth(self.revealed));
                if let Some(ch) = ch {
                    self.revealed += 1;
                    events.push(TypewriterEvent::CharTyped { ch });
                }
                if self.revealed >= self.current_len() {
                    self.complete_string(events);
                }
            }
            Phase::Holding => {
                if self.revealed == 0 {
                    self.next_string();
                } else {
                    self.phase = Phase::Deleting;
                }
            }
            Phase::Deleting => {
                self.revealed = self.revealed.saturating_sub(1);
                events.push(TypewriterEvent::CharDeleted);
                if self.revealed == 0 {
                    self.next_string();
                }
            }
            Phase::Done => {}
        }
    }
}
