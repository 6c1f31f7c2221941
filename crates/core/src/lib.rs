//! Name resolution and section iteration for template rendering.
//!
//! [`ScopeResolver::find`] resolves a dotted name against a stack of scopes
//! and returns a reusable [`Binding`]; [`iterate`] decides how many times a
//! section renders for a value. Resolution strategies are cached per
//! (type, name) in an [`AccessorCache`] shared across renders.

pub mod accessor;
pub mod cache;
pub mod config;
pub mod error;
pub mod iterate;
pub mod logging;
pub mod probe;
pub mod resolver;

pub use accessor::Accessor;
pub use cache::{AccessorCache, CacheStats, TypeKey, TypeTable};
pub use config::{LogConfig, ResolverConfig};
pub use error::{ResolveError, Result, StacheError};
pub use iterate::{Iteration, is_truthy, iterate};
pub use resolver::{Binding, MemberResolver, ScopeResolver};
