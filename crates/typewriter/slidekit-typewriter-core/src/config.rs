use serde::{Deserialize, Serialize};
use slidekit_api_core::{json::config_from_value, parse_config_json, ConfigError};

/// Shortest step the scheduler accepts, in seconds.
pub const MIN_INTERVAL: f32 = 0.001;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub strings: Vec<String>,
    /// Seconds per typed character.
    pub type_interval: f32,
    /// Seconds per deleted character.
    pub delete_interval: f32,
    /// Seconds a fully typed string stays before deletion starts.
    pub hold: f32,
    /// Seconds between a deleted string and the next one.
    pub pause: f32,
    /// Seconds before the first character.
    pub start_delay: f32,
    /// Cycle forever; otherwise stop once the last string is typed.
    pub looping: bool,
    /// Cursor blink half-period in seconds; 0 keeps the cursor solid.
    pub cursor_blink: f32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            strings: Vec::new(),
            type_interval: 0.08,
            delete_interval: 0.04,
            hold: 1.5,
            pause: 0.4,
            start_delay: 0.0,
            looping: true,
            cursor_blink: 0.53,
        }
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

impl TypewriterConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: TypewriterConfig = parse_config_json(text)?;
        Ok(cfg.sanitized())
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let cfg: TypewriterConfig = config_from_value(value)?;
        Ok(cfg.sanitized())
    }

    pub fn sanitized(mut self) -> Self {
        self.type_interval = non_negative(self.type_interval).max(MIN_INTERVAL);
        self.delete_interval = non_negative(self.delete_interval).max(MIN_INTERVAL);
        self.hold = non_negative(self.hold);
        self.pause = non_negative(self.pause);
        self.start_delay = non_negative(self.start_delay);
        self.cursor_blink = non_negative(self.cursor_blink);
        self
    }
}
