//! Probes for members named exactly like the looked-up name.

use super::{ProbeContext, ProbeStrategy};
use crate::accessor::Accessor;
use stache_api::{MemberKind, ParamKind};

/// Field named `name`.
pub struct FieldProbe;

impl ProbeStrategy for FieldProbe {
    fn probe(&self, name: &str, ctx: &ProbeContext) -> Option<Accessor> {
        let owner = ctx.accessible_owner(name, MemberKind::Field, &[])?;
        Some(Accessor::Field {
            owner: owner.into(),
            name: name.into(),
        })
    }
}

/// Zero-argument method named `name`.
pub struct NiladicMethodProbe;

impl ProbeStrategy for NiladicMethodProbe {
    fn probe(&self, name: &str, ctx: &ProbeContext) -> Option<Accessor> {
        let owner = ctx.accessible_owner(name, MemberKind::Method, &[])?;
        Some(Accessor::NiladicMethod {
            owner: owner.into(),
            name: name.into(),
        })
    }
}

/// Method named `name` taking a single list argument.
pub struct ListArgMethodProbe;

impl ProbeStrategy for ListArgMethodProbe {
    fn probe(&self, name: &str, ctx: &ProbeContext) -> Option<Accessor> {
        let owner = ctx.accessible_owner(name, MemberKind::Method, &[ParamKind::List])?;
        Some(Accessor::ListArgMethod {
            owner: owner.into(),
            name: name.into(),
        })
    }
}
