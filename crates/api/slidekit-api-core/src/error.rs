use thiserror::Error;

/// Errors produced while turning host-supplied configuration into typed config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config json parse error: {0}")]
    Parse(String),
    #[error("config must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
