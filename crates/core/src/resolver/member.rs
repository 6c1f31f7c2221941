//! Resolution of a single name against a single scope value.

use crate::accessor::Accessor;
use crate::cache::AccessorCache;
use crate::error::Result;
use crate::probe::{ProbeContext, ProbeStrategy, build_member_prober};
use stache_api::models::builtin::shape_of;
use stache_api::{DeferredError, Value};
use std::sync::Arc;

/// Replace a deferred value by its completed value, blocking until then.
///
/// This is the only point where resolution waits.
pub fn settle(scope: &Value) -> std::result::Result<Value, DeferredError> {
    match scope {
        Value::Deferred(deferred) => deferred.wait().inspect_err(|e| {
            tracing::warn!(error = %e, "Deferred scope value failed");
        }),
        other => Ok(other.clone()),
    }
}

/// Per-scope member resolution backed by the shared accessor cache.
pub struct MemberResolver {
    cache: Arc<AccessorCache>,
    prober: Box<dyn ProbeStrategy>,
}

impl MemberResolver {
    pub fn new(cache: Arc<AccessorCache>) -> Self {
        Self {
            cache,
            prober: Box::new(build_member_prober()),
        }
    }

    pub fn cache(&self) -> &Arc<AccessorCache> {
        &self.cache
    }

    pub fn root_type(&self) -> &str {
        self.cache.root_type()
    }

    /// Find how to read `name` from `scope`.
    ///
    /// Returns [`Accessor::NotFound`] when nothing matches; only a failing
    /// deferred scope value is an error.
    pub fn resolve(&self, scope: &Value, name: &str) -> Result<Accessor> {
        let scope = settle(scope)?;
        if name.is_empty() {
            return Ok(Accessor::NotFound);
        }

        let accessor = match &scope {
            Value::Null => Accessor::NotFound,
            // Containers answer from their contents and are never probed for
            // members; the answer depends on the instance, so it is not cached.
            Value::Map(map) => match map.get(name) {
                Some(value) if !value.is_null() => Accessor::container(name),
                _ => Accessor::NotFound,
            },
            other => match shape_of(other) {
                Some(shape) => self.cache.get_or_probe(&shape.name, name, || {
                    let ctx = ProbeContext::new(&shape, self.cache.root_type());
                    self.prober.probe(name, &ctx).unwrap_or(Accessor::NotFound)
                }),
                None => Accessor::NotFound,
            },
        };
        Ok(accessor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StacheError;
    use stache_api::{FutureValue, Record, TypeShape, Visibility};

    fn resolver() -> MemberResolver {
        MemberResolver::new(Arc::new(AccessorCache::new()))
    }

    #[test]
    fn test_map_null_value_is_not_found() {
        let scope = Value::map([("a", Value::Int(1)), ("b", Value::Null)]);
        let r = resolver();
        assert_eq!(r.resolve(&scope, "a").unwrap(), Accessor::container("a"));
        assert_eq!(r.resolve(&scope, "b").unwrap(), Accessor::NotFound);
        assert_eq!(r.resolve(&scope, "c").unwrap(), Accessor::NotFound);
        assert_eq!(r.cache().stats().types, 0);
    }

    #[test]
    fn test_map_is_not_probed_for_members() {
        let r = resolver();
        // Lists have `size`; maps do not expose anything but their keys
        assert_eq!(r.resolve(&Value::map([("a", Value::Int(1))]), "size").unwrap(), Accessor::NotFound);
        assert!(r.resolve(&Value::list([]), "size").unwrap().is_found());
    }

    #[test]
    fn test_deferred_scope_is_unwrapped() {
        let r = resolver();
        let scope = Value::deferred(FutureValue::ready(Value::map([("k", Value::Int(1))])));
        assert_eq!(r.resolve(&scope, "k").unwrap(), Accessor::container("k"));
    }

    #[test]
    fn test_failed_deferred_scope_is_fatal() {
        let r = resolver();
        let scope = Value::deferred(FutureValue::failed("connection reset"));
        assert!(matches!(r.resolve(&scope, "k"), Err(StacheError::Deferred(_))));
    }

    #[test]
    fn test_custom_root_type_bounds_walk() {
        let framework = TypeShape::builder("Entity").field("id", Visibility::Public).build();
        let model = TypeShape::builder("User")
            .extends(framework)
            .field("email", Visibility::Public)
            .build();
        let scope = Value::object(Record::new(model));

        let r = MemberResolver::new(Arc::new(AccessorCache::with_root_type("Entity")));
        assert!(r.resolve(&scope, "email").unwrap().is_found());
        assert_eq!(r.resolve(&scope, "id").unwrap(), Accessor::NotFound);
    }

    #[test]
    fn test_empty_name_is_not_found() {
        let r = resolver();
        assert_eq!(r.resolve(&Value::str("x"), "").unwrap(), Accessor::NotFound);
    }
}
