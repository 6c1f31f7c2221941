//! Section truthiness and iteration policy.
//!
//! | value                         | items        |
//! |-------------------------------|--------------|
//! | stream                        | passed through, consumed once |
//! | list, iterable object         | its items    |
//! | null, `false`, `""`           | none         |
//! | anything else                 | the value itself, once |

use stache_api::{Value, ValueStream};
use std::sync::Arc;

/// Items a section is rendered over.
#[derive(Debug)]
pub struct Iteration {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Empty,
    Single(Option<Value>),
    Shared { items: Arc<Vec<Value>>, next: usize },
    Owned(std::vec::IntoIter<Value>),
    Stream(ValueStream),
}

impl Iteration {
    fn new(inner: Inner) -> Self {
        Self { inner }
    }

    pub fn empty() -> Self {
        Self::new(Inner::Empty)
    }
}

impl Iterator for Iteration {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match &mut self.inner {
            Inner::Empty => None,
            Inner::Single(value) => value.take(),
            Inner::Shared { items, next } => {
                let item = items.get(*next).cloned();
                *next += 1;
                item
            }
            Inner::Owned(items) => items.next(),
            Inner::Stream(stream) => stream.next(),
        }
    }
}

/// Decide how many times a section renders for `value`, and over what.
pub fn iterate(value: Value) -> Iteration {
    let inner = match value {
        Value::Stream(stream) => Inner::Stream(stream),
        Value::List(items) => Inner::Shared { items, next: 0 },
        Value::Object(object) => match object.elements() {
            Some(items) => Inner::Owned(items.into_iter()),
            None => Inner::Single(Some(Value::Object(object))),
        },
        Value::Null | Value::Bool(false) => Inner::Empty,
        Value::Str(s) if s.is_empty() => Inner::Empty,
        other => Inner::Single(Some(other)),
    };
    Iteration::new(inner)
}

/// Whether a section renders at least once for `value`.
///
/// Streams are reported truthy without being consumed.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Str(s) => !s.is_empty(),
        Value::List(items) => !items.is_empty(),
        Value::Object(object) => object.elements().is_none_or(|items| !items.is_empty()),
        _ => true,
    }
}
