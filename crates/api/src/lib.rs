//! Value model shared by the stache resolver and its callers.
//!
//! Callers describe their data with [`Value`]s. Objects declare their member
//! surface through a [`TypeShape`]; deferred values implement [`Deferred`].

pub mod error;
pub mod models;

pub use error::{DeferredError, InvokeError, InvokeResult};
pub use models::*;
