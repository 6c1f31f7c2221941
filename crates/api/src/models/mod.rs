pub mod builtin;
pub mod deferred;
pub mod object;
pub mod shape;
pub mod value;

pub use deferred::{Deferred, FutureValue};
pub use object::{MethodFn, Object, Record};
pub use shape::{MemberDef, MemberKind, ParamKind, ROOT_TYPE, TypeShape, TypeShapeBuilder, Visibility};
pub use value::{Value, ValueMap, ValueStream};
