//! SlideKit typewriter core: a discrete scheduler that types, holds, deletes
//! and cycles through a list of strings.

pub mod config;
pub mod typewriter;

pub use config::TypewriterConfig;
pub use typewriter::{register_cursor_styles, Phase, Typewriter, TypewriterEvent};
pub use typewriter::{CURSOR_CSS, CURSOR_STYLE_KEY};
