//! Declared member surface of runtime types.
//!
//! Resolution never inspects Rust types directly. Every object describes
//! itself with a [`TypeShape`]: its name, its declared members and its
//! supertype. The name doubles as the cache identity of the runtime type, so
//! two distinct shapes must never share one.

use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// Name of the universal root type.
pub const ROOT_TYPE: &str = "Object";

static ROOT: Lazy<Arc<TypeShape>> = Lazy::new(|| {
    Arc::new(
        TypeShape::builder(ROOT_TYPE)
            .method("getClass", Visibility::Public)
            .method("hashCode", Visibility::Public)
            .method("toString", Visibility::Public)
            .build_root(),
    )
});

/// Access level of a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    pub fn is_accessible(self) -> bool {
        !matches!(self, Visibility::Private)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Method,
}

/// Parameter type of a declared method, as far as resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// An ordered sequence of values.
    List,
    /// Anything else.
    Scalar,
}

/// A field or method declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDef {
    pub name: String,
    pub kind: MemberKind,
    pub visibility: Visibility,
    /// Method parameters (always empty for fields)
    pub params: Vec<ParamKind>,
}

impl MemberDef {
    pub fn signature_matches(&self, name: &str, kind: MemberKind, params: &[ParamKind]) -> bool {
        self.kind == kind && self.name == name && self.params == params
    }
}

/// The member surface of one runtime type.
#[derive(Clone, PartialEq, Eq)]
pub struct TypeShape {
    pub name: String,
    pub supertype: Option<Arc<TypeShape>>,
    pub members: Vec<MemberDef>,
}

impl fmt::Debug for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeShape")
            .field("name", &self.name)
            .field("supertype", &self.supertype.as_ref().map(|s| s.name.as_str()))
            .field("members", &self.members.len())
            .finish()
    }
}

impl TypeShape {
    pub fn builder(name: impl Into<String>) -> TypeShapeBuilder {
        TypeShapeBuilder {
            name: name.into(),
            supertype: None,
            members: Vec::new(),
        }
    }

    /// The shared root shape every builder extends by default.
    pub fn root() -> Arc<TypeShape> {
        ROOT.clone()
    }

    /// Find a member declared directly on this type with the exact signature.
    ///
    /// Does NOT search supertypes.
    pub fn declared(&self, name: &str, kind: MemberKind, params: &[ParamKind]) -> Option<&MemberDef> {
        self.members
            .iter()
            .find(|m| m.signature_matches(name, kind, params))
    }

    /// Walk this type and its supertypes, nearest first.
    ///
    /// The walk stops before the type named `root`, so members of the
    /// universal base type are never visited.
    pub fn ancestors<'a>(&'a self, root: &'a str) -> impl Iterator<Item = &'a TypeShape> + 'a {
        std::iter::successors(Some(self), |&shape| shape.supertype.as_deref())
            .take_while(move |shape| shape.name != root)
    }

    /// Find the nearest declaration of a member in the hierarchy.
    ///
    /// Returns the declaring type together with the member.
    pub fn find_in_hierarchy<'a>(
        &'a self,
        root: &'a str,
        name: &str,
        kind: MemberKind,
        params: &[ParamKind],
    ) -> Option<(&'a TypeShape, &'a MemberDef)> {
        self.ancestors(root)
            .find_map(|shape| shape.declared(name, kind, params).map(|m| (shape, m)))
    }
}

/// Fluent builder for [`TypeShape`].
#[derive(Debug)]
pub struct TypeShapeBuilder {
    name: String,
    supertype: Option<Arc<TypeShape>>,
    members: Vec<MemberDef>,
}

impl TypeShapeBuilder {
    pub fn extends(mut self, supertype: Arc<TypeShape>) -> Self {
        self.supertype = Some(supertype);
        self
    }

    pub fn field(self, name: &str, visibility: Visibility) -> Self {
        self.member(name, MemberKind::Field, visibility, vec![])
    }

    /// Declare a zero-argument method.
    pub fn method(self, name: &str, visibility: Visibility) -> Self {
        self.member(name, MemberKind::Method, visibility, vec![])
    }

    pub fn method_with(self, name: &str, visibility: Visibility, params: Vec<ParamKind>) -> Self {
        self.member(name, MemberKind::Method, visibility, params)
    }

    fn member(
        mut self,
        name: &str,
        kind: MemberKind,
        visibility: Visibility,
        params: Vec<ParamKind>,
    ) -> Self {
        self.members.push(MemberDef {
            name: name.to_string(),
            kind,
            visibility,
            params,
        });
        self
    }

    /// Finish the shape. Types without an explicit supertype extend the root.
    pub fn build(self) -> Arc<TypeShape> {
        let supertype = self.supertype.unwrap_or_else(TypeShape::root);
        Arc::new(TypeShape {
            name: self.name,
            supertype: Some(supertype),
            members: self.members,
        })
    }

    fn build_root(self) -> TypeShape {
        TypeShape {
            name: self.name,
            supertype: None,
            members: self.members,
        }
    }
}
