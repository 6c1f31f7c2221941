//! Objects with a declared member surface.

use super::shape::TypeShape;
use super::value::Value;
use crate::error::{InvokeError, InvokeResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A value exposing fields and accessor methods described by its shape.
///
/// Member dispatch always names the declaring type, so a subtype may
/// shadow an inherited field without ambiguity.
pub trait Object: Send + Sync + fmt::Debug {
    fn shape(&self) -> &Arc<TypeShape>;

    /// Read a field declared on `owner`.
    fn read_field(&self, owner: &str, name: &str) -> InvokeResult<Value>;

    /// Call a method declared on `owner`.
    fn call_method(&self, owner: &str, name: &str, args: &[Value]) -> InvokeResult<Value>;

    /// Items of this object when it is an iterable collection.
    fn elements(&self) -> Option<Vec<Value>> {
        None
    }
}

pub type MethodFn = Arc<dyn Fn(&[Value]) -> InvokeResult<Value> + Send + Sync>;

/// A general-purpose object assembled from a shape, field values and
/// method closures.
#[derive(Clone)]
pub struct Record {
    shape: Arc<TypeShape>,
    fields: HashMap<String, Value>,
    methods: HashMap<String, MethodFn>,
    elements: Option<Vec<Value>>,
}

impl Record {
    pub fn new(shape: Arc<TypeShape>) -> Self {
        Self {
            shape,
            fields: HashMap::new(),
            methods: HashMap::new(),
            elements: None,
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn with_method<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&[Value]) -> InvokeResult<Value> + Send + Sync + 'static,
    {
        self.methods.insert(name.to_string(), Arc::new(f));
        self
    }

    /// Mark the record as an iterable collection of `items`.
    pub fn with_elements(mut self, items: Vec<Value>) -> Self {
        self.elements = Some(items);
        self
    }
}

impl Object for Record {
    fn shape(&self) -> &Arc<TypeShape> {
        &self.shape
    }

    fn read_field(&self, owner: &str, name: &str) -> InvokeResult<Value> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| InvokeError::missing(owner, name))
    }

    fn call_method(&self, owner: &str, name: &str, args: &[Value]) -> InvokeResult<Value> {
        let method = self
            .methods
            .get(name)
            .ok_or_else(|| InvokeError::missing(owner, name))?;
        method(args)
    }

    fn elements(&self) -> Option<Vec<Value>> {
        self.elements.clone()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("type", &self.shape.name)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shape::Visibility;

    #[test]
    fn test_record_dispatch() {
        let shape = TypeShape::builder("Report")
            .field("pages", Visibility::Public)
            .method("getTitle", Visibility::Public)
            .build();
        let record = Record::new(shape)
            .with_field("pages", 3i64)
            .with_method("getTitle", |_| Ok(Value::str("Report")));

        assert_eq!(record.read_field("Report", "pages").unwrap(), Value::Int(3));
        assert_eq!(
            record.call_method("Report", "getTitle", &[]).unwrap(),
            Value::str("Report")
        );
        assert!(matches!(
            record.read_field("Report", "missing"),
            Err(InvokeError::MissingMember { .. })
        ));
    }
}
