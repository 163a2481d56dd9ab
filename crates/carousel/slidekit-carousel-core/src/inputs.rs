//! Host notifications consumed by the engine.
//!
//! Pointer handlers, resize observers and slot-change observers on the host
//! each turn into one of these values and are dispatched synchronously through
//! `Carousel::handle`, between frames.

use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    Attach { geometry: Geometry },
    Resize { geometry: Geometry },
    SlidesChanged { geometry: Geometry },
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    /// Pointer capture lost (e.g. the pointer left the window).
    PointerCancel,
    Next,
    Prev,
    GoTo { index: i64 },
    Detach,
}
