/// A deferred value that could not produce its result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeferredError {
    #[error("Deferred value failed to complete: {0}")]
    Failed(String),
}

/// Failure while applying a resolved accessor to a live value.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("Member {owner}.{name} is not available on this value")]
    MissingMember { owner: String, name: String },
    #[error("Cannot apply {accessor} to a {found} value")]
    ScopeMismatch {
        accessor: &'static str,
        found: String,
    },
    #[error("Invocation of {owner}.{name} failed: {message}")]
    Failed {
        owner: String,
        name: String,
        message: String,
    },
    #[error(transparent)]
    Deferred(#[from] DeferredError),
}

impl InvokeError {
    pub fn missing(owner: &str, name: &str) -> Self {
        InvokeError::MissingMember {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    pub fn failed(owner: &str, name: &str, message: impl Into<String>) -> Self {
        InvokeError::Failed {
            owner: owner.to_string(),
            name: name.to_string(),
            message: message.into(),
        }
    }
}

pub type InvokeResult<T> = std::result::Result<T, InvokeError>;
