use thiserror::Error;

/// Errors from turning string identifiers into typed ids
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlassError {
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}
