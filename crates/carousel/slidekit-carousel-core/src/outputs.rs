//! Output contracts from the carousel engine.
//!
//! Outputs carry this frame's slide transforms plus the semantic events raised
//! since the previous frame. Hosts apply the transforms and forward events.

use serde::{Deserialize, Serialize};

use crate::layout::SlideTransform;

/// Discrete notifications for the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselEvent {
    /// The selected slide changed through navigation or a drag release.
    IndexChanged { index: u32 },
    /// Motion converged and the loop stopped.
    Settled { index: u32 },
    /// Tallest slide height, for hosts that size themselves to content.
    AutoHeight { height: f32 },
    LoopStarted,
    LoopStopped,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Transforms to apply; empty when nothing needs writing this frame.
    #[serde(default)]
    pub transforms: Vec<SlideTransform>,
    #[serde(default)]
    pub events: Vec<CarouselEvent>,
    /// The host should request another frame.
    pub running: bool,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.transforms.clear();
        self.events.clear();
        self.running = false;
    }

    #[inline]
    pub fn push_event(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty() && self.events.is_empty()
    }
}
