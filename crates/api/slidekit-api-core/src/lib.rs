//! slidekit-api-core: pieces shared by every SlideKit widget (engine-agnostic).
//!
//! - [`ConfigError`]: the one fallible surface, parsing host configuration.
//! - [`json`]: normalisation of host config objects (camelCase keys, null fields).
//! - [`registry`]: process-wide, reference-counted stylesheet registration.

pub mod error;
pub mod json;
pub mod registry;

pub use error::ConfigError;
pub use json::{normalize_config_json, parse_config_json};
pub use registry::{StyleHandle, StyleRegistry};
