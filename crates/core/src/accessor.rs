//! Accessors: how to pull a named value out of a scope value.
//!
//! An [`Accessor`] is computed once per (type, name) and then invoked
//! repeatedly against live data as rendering proceeds.

use stache_api::models::builtin::call_builtin;
use stache_api::{InvokeError, InvokeResult, Value};
use std::fmt;
use std::sync::Arc;

/// One resolution strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// Keyed lookup into a map.
    ContainerLookup { key: Arc<str> },
    Field { owner: Arc<str>, name: Arc<str> },
    /// Zero-argument accessor method.
    NiladicMethod { owner: Arc<str>, name: Arc<str> },
    /// Single-argument accessor method taking a list.
    ListArgMethod { owner: Arc<str>, name: Arc<str> },
    /// `get<Name>` or `is<Name>`.
    ConventionalGetter { owner: Arc<str>, method: Arc<str> },
    /// Segments of a dotted path, applied left to right.
    Chain(Arc<[Accessor]>),
    /// No strategy exists for this (type, name).
    NotFound,
}

impl Accessor {
    pub fn container(key: &str) -> Self {
        Accessor::ContainerLookup { key: Arc::from(key) }
    }

    /// Compose path segments. A single segment is returned as is.
    pub fn chain(mut segments: Vec<Accessor>) -> Self {
        if segments.len() == 1 {
            return segments.pop().unwrap_or(Accessor::NotFound);
        }
        Accessor::Chain(segments.into())
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Accessor::NotFound)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Accessor::ContainerLookup { .. } => "container lookup",
            Accessor::Field { .. } => "field",
            Accessor::NiladicMethod { .. } => "niladic method",
            Accessor::ListArgMethod { .. } => "list-argument method",
            Accessor::ConventionalGetter { .. } => "conventional getter",
            Accessor::Chain(_) => "chain",
            Accessor::NotFound => "not found",
        }
    }

    /// Apply this accessor to `scope`.
    pub fn invoke(&self, scope: &Value) -> InvokeResult<Value> {
        self.invoke_with(scope, &[])
    }

    /// Apply this accessor, handing `args` to list-argument methods.
    pub fn invoke_with(&self, scope: &Value, args: &[Value]) -> InvokeResult<Value> {
        let scope = match scope {
            Value::Deferred(deferred) => deferred.wait()?,
            other => other.clone(),
        };
        if scope.is_null() {
            return Ok(Value::Null);
        }

        match self {
            Accessor::ContainerLookup { key } => match &scope {
                Value::Map(map) => Ok(map.get(key.as_ref()).cloned().unwrap_or(Value::Null)),
                other => Err(self.mismatch(other)),
            },
            Accessor::Field { owner, name } => match &scope {
                Value::Object(object) => object.read_field(owner, name),
                other => Err(self.mismatch(other)),
            },
            Accessor::NiladicMethod { owner, name }
            | Accessor::ConventionalGetter {
                owner,
                method: name,
            } => call(&scope, owner, name, &[]),
            Accessor::ListArgMethod { owner, name } => {
                call(&scope, owner, name, &[Value::list(args.iter().cloned())])
            }
            // Only the final segment sees caller arguments
            Accessor::Chain(steps) => match steps.split_last() {
                Some((last, path)) => {
                    let target = path
                        .iter()
                        .try_fold(scope, |current, step| step.invoke(&current))?;
                    last.invoke_with(&target, args)
                }
                None => Ok(Value::Null),
            },
            Accessor::NotFound => Ok(Value::Null),
        }
    }

    fn mismatch(&self, found: &Value) -> InvokeError {
        InvokeError::ScopeMismatch {
            accessor: self.kind(),
            found: found.kind_name().to_string(),
        }
    }
}

fn call(scope: &Value, owner: &str, name: &str, args: &[Value]) -> InvokeResult<Value> {
    match scope {
        Value::Object(object) => object.call_method(owner, name, args),
        Value::Map(_) | Value::Deferred(_) => Err(InvokeError::ScopeMismatch {
            accessor: "method",
            found: scope.kind_name().to_string(),
        }),
        plain => call_builtin(plain, owner, name),
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::ContainerLookup { key } => write!(f, "[{key}]"),
            Accessor::Field { owner, name } => write!(f, "{owner}.{name}"),
            Accessor::NiladicMethod { owner, name }
            | Accessor::ConventionalGetter {
                owner,
                method: name,
            } => write!(f, "{owner}.{name}()"),
            Accessor::ListArgMethod { owner, name } => write!(f, "{owner}.{name}(List)"),
            Accessor::Chain(steps) => {
                for (i, step) in steps.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" -> ")?;
                    }
                    write!(f, "{step}")?;
                }
                Ok(())
            }
            Accessor::NotFound => f.write_str("<not found>"),
        }
    }
}
