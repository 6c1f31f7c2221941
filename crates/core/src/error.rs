use stache_api::{DeferredError, InvokeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StacheError {
    #[error("Scope value could not be resolved: {0}")]
    Deferred(#[from] DeferredError),
    #[error("Accessor invocation failed: {0}")]
    Invoke(#[from] InvokeError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by name resolution.
pub type ResolveError = StacheError;

pub type Result<T> = std::result::Result<T, StacheError>;
