//! Prev/next affordance policy.

use serde::{Deserialize, Serialize};

use crate::config::ControlsMode;
use crate::state::CarouselState;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub visible: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Resolve the controls for the current state. Bounded mode disables prev at
/// the first slide and next at the last; wrap mode never disables them.
pub fn resolve(mode: ControlsMode, state: &CarouselState) -> Controls {
    let visible = match mode {
        ControlsMode::Auto => state.can_overflow,
        ControlsMode::Always => true,
        ControlsMode::Never => false,
    };
    if !state.can_overflow {
        return Controls {
            visible,
            prev_enabled: false,
            next_enabled: false,
        };
    }
    if state.wrap {
        return Controls {
            visible,
            prev_enabled: true,
            next_enabled: true,
        };
    }
    let target = state.target.round();
    Controls {
        visible,
        prev_enabled: target < 0.0,
        next_enabled: target > state.max_scroll,
    }
}
