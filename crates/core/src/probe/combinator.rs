//! Combinator implementations for ProbeStrategy.

use super::{ProbeContext, ProbeStrategy};
use crate::accessor::Accessor;

/// Or-else combinator: try first, then second if first returns None.
pub struct OrElse<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrElse<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: ProbeStrategy, B: ProbeStrategy> ProbeStrategy for OrElse<A, B> {
    fn probe(&self, name: &str, ctx: &ProbeContext) -> Option<Accessor> {
        self.first
            .probe(name, ctx)
            .or_else(|| self.second.probe(name, ctx))
    }
}
