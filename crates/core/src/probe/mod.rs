//! Member probes using the combinator pattern.
//!
//! Each probe implements [`ProbeStrategy`] and looks for one kind of member
//! on a type shape. Probes are chained with `or_else()`; the first one to
//! produce an accessor wins.

mod combinator;
mod getter;
mod member;

pub use combinator::OrElse;
pub use getter::GetterProbe;
pub use member::{FieldProbe, ListArgMethodProbe, NiladicMethodProbe};

use crate::accessor::Accessor;
use stache_api::{MemberKind, ParamKind, TypeShape};

/// What a probe gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct ProbeContext<'a> {
    pub shape: &'a TypeShape,
    /// Supertype walks stop before this type
    pub root: &'a str,
}

impl<'a> ProbeContext<'a> {
    pub fn new(shape: &'a TypeShape, root: &'a str) -> Self {
        Self { shape, root }
    }

    /// Name of the type declaring an accessible member with this exact
    /// signature.
    ///
    /// The nearest declaration in the hierarchy decides. A private nearest
    /// declaration makes the member absent; it does not fall through to a
    /// supertype.
    pub fn accessible_owner(&self, name: &str, kind: MemberKind, params: &[ParamKind]) -> Option<&'a str> {
        let (owner, member) = self.shape.find_in_hierarchy(self.root, name, kind, params)?;
        if !member.visibility.is_accessible() {
            tracing::trace!(
                type_name = %self.shape.name,
                owner = %owner.name,
                member = name,
                "Ignoring private member"
            );
            return None;
        }
        Some(owner.name.as_str())
    }
}

/// A member resolution strategy.
pub trait ProbeStrategy: Send + Sync {
    /// Look for `name` on the context's type.
    ///
    /// Returns `None` if this strategy doesn't apply.
    fn probe(&self, name: &str, ctx: &ProbeContext) -> Option<Accessor>;

    /// Combine with another strategy using "or" logic.
    ///
    /// If `self` returns `None`, try `other`.
    fn or_else<S: ProbeStrategy>(self, other: S) -> OrElse<Self, S>
    where
        Self: Sized,
    {
        OrElse::new(self, other)
    }
}

/// Build the member prober in its fixed order: field, niladic method,
/// list-argument method, `get<Name>`, `is<Name>`.
pub fn build_member_prober() -> impl ProbeStrategy {
    FieldProbe
        .or_else(NiladicMethodProbe)
        .or_else(ListArgMethodProbe)
        .or_else(GetterProbe::get())
        .or_else(GetterProbe::is())
}
