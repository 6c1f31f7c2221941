//! Shapes of the builtin value variants.
//!
//! Plain values expose a small accessor surface of their own (`list.size`,
//! `name.empty`) so member resolution treats them like any other type.

use super::shape::{TypeShape, Visibility};
use super::value::Value;
use crate::error::{InvokeError, InvokeResult};
use once_cell::sync::Lazy;
use std::sync::Arc;

pub const STRING_TYPE: &str = "String";
pub const LIST_TYPE: &str = "List";
pub const BOOLEAN_TYPE: &str = "Boolean";
pub const LONG_TYPE: &str = "Long";
pub const DOUBLE_TYPE: &str = "Double";
pub const ITERATOR_TYPE: &str = "Iterator";

static STRING: Lazy<Arc<TypeShape>> = Lazy::new(|| {
    TypeShape::builder(STRING_TYPE)
        .method("length", Visibility::Public)
        .method("isEmpty", Visibility::Public)
        .build()
});

static LIST: Lazy<Arc<TypeShape>> = Lazy::new(|| {
    TypeShape::builder(LIST_TYPE)
        .method("size", Visibility::Public)
        .method("isEmpty", Visibility::Public)
        .build()
});

static BOOLEAN: Lazy<Arc<TypeShape>> = Lazy::new(|| TypeShape::builder(BOOLEAN_TYPE).build());
static LONG: Lazy<Arc<TypeShape>> = Lazy::new(|| TypeShape::builder(LONG_TYPE).build());
static DOUBLE: Lazy<Arc<TypeShape>> = Lazy::new(|| TypeShape::builder(DOUBLE_TYPE).build());
static ITERATOR: Lazy<Arc<TypeShape>> = Lazy::new(|| TypeShape::builder(ITERATOR_TYPE).build());

/// Shape used for member probing of a value.
///
/// `None` for values that are never probed: null, keyed containers and
/// deferred values.
pub fn shape_of(value: &Value) -> Option<Arc<TypeShape>> {
    match value {
        Value::Str(_) => Some(STRING.clone()),
        Value::List(_) => Some(LIST.clone()),
        Value::Bool(_) => Some(BOOLEAN.clone()),
        Value::Int(_) => Some(LONG.clone()),
        Value::Float(_) => Some(DOUBLE.clone()),
        Value::Stream(_) => Some(ITERATOR.clone()),
        Value::Object(object) => Some(object.shape().clone()),
        Value::Null | Value::Map(_) | Value::Deferred(_) => None,
    }
}

/// Call a builtin method on a plain value.
pub fn call_builtin(value: &Value, owner: &str, name: &str) -> InvokeResult<Value> {
    match (value, name) {
        // UTF-16 code units
        (Value::Str(s), "length") => Ok(Value::Int(s.encode_utf16().count() as i64)),
        (Value::Str(s), "isEmpty") => Ok(Value::Bool(s.is_empty())),
        (Value::List(items), "size") => Ok(Value::Int(items.len() as i64)),
        (Value::List(items), "isEmpty") => Ok(Value::Bool(items.is_empty())),
        _ => Err(InvokeError::missing(owner, name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_of_plain_values() {
        assert_eq!(shape_of(&Value::str("x")).unwrap().name, STRING_TYPE);
        assert_eq!(shape_of(&Value::Int(0)).unwrap().name, LONG_TYPE);
        assert!(shape_of(&Value::Null).is_none());
        assert!(shape_of(&Value::map([("a", Value::Null)])).is_none());
    }

    #[test]
    fn test_call_builtin() {
        let list = Value::list([Value::Int(1), Value::Int(2)]);
        assert_eq!(call_builtin(&list, LIST_TYPE, "size").unwrap(), Value::Int(2));
        assert_eq!(
            call_builtin(&Value::str(""), STRING_TYPE, "isEmpty").unwrap(),
            Value::Bool(true)
        );
        assert!(call_builtin(&Value::Int(1), LONG_TYPE, "size").is_err());
    }

    #[test]
    fn test_string_length_counts_utf16_units() {
        let length = |s: &str| call_builtin(&Value::str(s), STRING_TYPE, "length").unwrap();
        assert_eq!(length("abc"), Value::Int(3));
        assert_eq!(length("é"), Value::Int(1));
        assert_eq!(length("a😀"), Value::Int(3));
    }
}
