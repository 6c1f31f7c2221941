//! Scope stack resolution.
//!
//! # Architecture
//!
//! ```text
//! ScopeResolver::find(name, scopes)  →  innermost scope first, whole dotted path
//!       │
//!       ▼
//! MemberResolver::resolve(scope, seg) →  deferred unwrap, container lookup
//!       │
//!       ▼
//! AccessorCache + member probes       →  field, method, list-arg method, getters
//! ```

mod binding;
pub mod member;

pub use binding::Binding;
pub use member::{MemberResolver, settle};

use crate::accessor::Accessor;
use crate::cache::AccessorCache;
use crate::config::ResolverConfig;
use crate::error::Result;
use crate::iterate::{Iteration, iterate};
use stache_api::Value;
use std::sync::Arc;

/// Resolves template names against a stack of scopes.
///
/// Cheap to share: all state lives in the injected [`AccessorCache`].
pub struct ScopeResolver {
    members: MemberResolver,
}

impl ScopeResolver {
    /// Resolver over a shared cache. The cache decides the root type.
    pub fn new(cache: Arc<AccessorCache>) -> Self {
        Self {
            members: MemberResolver::new(cache),
        }
    }

    /// Resolver with a private cache built from `config`.
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(Arc::new(AccessorCache::from_config(config)))
    }

    pub fn cache(&self) -> &Arc<AccessorCache> {
        self.members.cache()
    }

    /// Resolve `name` against `scopes` (outermost first, innermost last).
    ///
    /// The innermost scope at which the whole dotted path resolves wins.
    /// Returns `Ok(None)` when no scope matches.
    pub fn find(&self, name: &str, scopes: &[Value]) -> Result<Option<Binding>> {
        let segments: Vec<&str> = name.split('.').collect();
        let Some((last, path)) = segments.split_last() else {
            return Ok(None);
        };

        for (depth, start) in scopes.iter().enumerate().rev() {
            if start.is_null() {
                continue;
            }
            if let Some(accessor) = self.resolve_path(start, path, last)? {
                tracing::trace!(path = name, depth, accessor = %accessor, "Resolved name");
                return Ok(Some(Binding::new(accessor, depth)));
            }
        }

        tracing::trace!(path = name, scopes = scopes.len(), "Name not found in any scope");
        Ok(None)
    }

    /// Resolve and read `name` in one step, `Null` when absent.
    pub fn value(&self, name: &str, scopes: &[Value]) -> Result<Value> {
        match self.find(name, scopes)? {
            Some(binding) => Ok(binding.extract(scopes)?),
            None => Ok(Value::Null),
        }
    }

    /// Resolve one name against one scope value.
    pub fn resolve_member(&self, scope: &Value, name: &str) -> Result<Accessor> {
        self.members.resolve(scope, name)
    }

    /// Items a section renders over for `value`.
    pub fn iterate(&self, value: Value) -> Iteration {
        iterate(value)
    }

    /// Resolve `path` then `last` starting from `start`.
    ///
    /// Intermediate segments are evaluated eagerly since the type reached at
    /// each step is only known from the computed value. Any unresolved
    /// segment abandons this start scope.
    fn resolve_path(&self, start: &Value, path: &[&str], last: &str) -> Result<Option<Accessor>> {
        let mut steps = Vec::with_capacity(path.len() + 1);
        let mut current = start.clone();

        for segment in path {
            current = settle(&current)?;
            let accessor = self.members.resolve(&current, segment)?;
            if !accessor.is_found() {
                return Ok(None);
            }
            current = accessor.invoke(&current)?;
            steps.push(accessor);
        }

        let accessor = self.members.resolve(&current, last)?;
        if !accessor.is_found() {
            return Ok(None);
        }
        steps.push(accessor);
        Ok(Some(Accessor::chain(steps)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scopes(values: Vec<serde_json::Value>) -> Vec<Value> {
        values.into_iter().map(Value::from).collect()
    }

    fn resolver() -> ScopeResolver {
        ScopeResolver::new(Arc::new(AccessorCache::new()))
    }

    #[test]
    fn test_innermost_scope_shadows() {
        let stack = scopes(vec![json!({"name": "outer"}), json!({"name": "inner", "age": 5})]);
        let r = resolver();

        let binding = r.find("name", &stack).unwrap().unwrap();
        assert_eq!(binding.depth, 1);
        assert_eq!(binding.extract(&stack).unwrap(), Value::str("inner"));
    }

    #[test]
    fn test_falls_back_to_outer_scope() {
        let stack = scopes(vec![json!({"title": "Doc"}), json!({"age": 5})]);
        let binding = resolver().find("title", &stack).unwrap().unwrap();
        assert_eq!(binding.depth, 0);
        assert_eq!(binding.extract(&stack).unwrap(), Value::str("Doc"));
    }

    #[test]
    fn test_null_scopes_are_skipped() {
        let stack = vec![Value::from(json!({"a": 1})), Value::Null];
        let binding = resolver().find("a", &stack).unwrap().unwrap();
        assert_eq!(binding.depth, 0);
    }

    #[test]
    fn test_not_found_is_none() {
        let stack = scopes(vec![json!({"a": 1})]);
        let r = resolver();
        assert_eq!(r.find("b", &stack).unwrap(), None);
        assert_eq!(r.find("a.b", &stack).unwrap(), None);
        assert_eq!(r.find("", &stack).unwrap(), None);
        assert_eq!(r.find("a", &[]).unwrap(), None);
        assert_eq!(r.value("b", &stack).unwrap(), Value::Null);
    }

    #[test]
    fn test_dotted_path_builds_chain() {
        let stack = scopes(vec![json!({"user": {"address": {"city": "NY"}}})]);
        let binding = resolver().find("user.address.city", &stack).unwrap().unwrap();
        assert_eq!(
            binding.accessor,
            Accessor::chain(vec![
                Accessor::container("user"),
                Accessor::container("address"),
                Accessor::container("city"),
            ])
        );
        assert_eq!(binding.extract(&stack).unwrap(), Value::str("NY"));
    }
}
