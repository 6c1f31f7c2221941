use crate::accessor::Accessor;
use stache_api::{InvokeResult, Value};

/// A resolved name: the accessor plus the scope depth it matched at.
///
/// Computed once per name occurrence and reused to extract live values
/// from any scope stack of matching shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub accessor: Accessor,
    /// Index into the scope stack, outermost first
    pub depth: usize,
}

impl Binding {
    pub fn new(accessor: Accessor, depth: usize) -> Self {
        Self { accessor, depth }
    }

    /// Read the bound value from `scopes`.
    ///
    /// A stack too short to reach the bound depth reads as null.
    pub fn extract(&self, scopes: &[Value]) -> InvokeResult<Value> {
        self.extract_with(scopes, &[])
    }

    pub fn extract_with(&self, scopes: &[Value], args: &[Value]) -> InvokeResult<Value> {
        match scopes.get(self.depth) {
            Some(scope) => self.accessor.invoke_with(scope, args),
            None => Ok(Value::Null),
        }
    }
}
