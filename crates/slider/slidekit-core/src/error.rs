//! Error type for the few fallible entry points of the engine.
//!
//! Interaction commands never fail; they clamp, wrap or log and return.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("slider config parse error: {0}")]
    ConfigParse(String),
    #[error("unknown breakpoint key '{0}'")]
    UnknownBreakpoint(String),
    #[error("invalid css length '{0}'")]
    InvalidLength(String),
}

impl From<serde_json::Error> for SliderError {
    fn from(err: serde_json::Error) -> Self {
        SliderError::ConfigParse(err.to_string())
    }
}
