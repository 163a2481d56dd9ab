//! SlideKit carousel core (host-agnostic)
//!
//! The motion engine behind every SlideKit carousel. A host (the wasm binding,
//! or a native UI) feeds it geometry snapshots and pointer/navigation input and
//! calls [`Carousel::frame`] from its frame callback while
//! [`Carousel::needs_frame`] is true; each frame returns the slide transforms
//! to apply plus any events to forward.
//!
//! Positions are in slide-index units. Wrap mode counts forward through the
//! content (`target = 3` shows slide 3); bounded mode counts the strip offset
//! (`target = -3` shows slide 3) and clamps to `[-(n - 1), 0]`.

pub mod config;
pub mod controls;
pub mod engine;
pub mod geometry;
pub mod inputs;
pub mod interaction;
pub mod layout;
pub mod measure;
pub mod outputs;
pub mod scheduler;
pub mod state;
pub mod styles;

// Re-exports for consumers (hosts)
pub use config::{CarouselConfig, ControlsMode};
pub use controls::Controls;
pub use engine::Carousel;
pub use geometry::Geometry;
pub use inputs::HostEvent;
pub use interaction::Outcome;
pub use layout::{Layout, SlideTransform};
pub use measure::{measure, Measurement};
pub use outputs::{CarouselEvent, Outputs};
pub use scheduler::{Scheduler, Tick, SETTLE_EPSILON};
pub use state::CarouselState;
pub use styles::{register_base_styles, BASE_CSS, BASE_STYLE_KEY};
