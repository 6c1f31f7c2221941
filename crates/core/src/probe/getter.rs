//! Conventional getter probes (`getTitle`, `isActive`).

use super::{ProbeContext, ProbeStrategy};
use crate::accessor::Accessor;
use stache_api::MemberKind;

/// Zero-argument method named `<prefix><Capitalized name>`.
pub struct GetterProbe {
    prefix: &'static str,
}

impl GetterProbe {
    pub fn get() -> Self {
        Self { prefix: "get" }
    }

    pub fn is() -> Self {
        Self { prefix: "is" }
    }

    pub fn method_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, capitalize(name))
    }
}

impl ProbeStrategy for GetterProbe {
    fn probe(&self, name: &str, ctx: &ProbeContext) -> Option<Accessor> {
        let method = self.method_name(name);
        let owner = ctx.accessible_owner(&method, MemberKind::Method, &[])?;
        Some(Accessor::ConventionalGetter {
            owner: owner.into(),
            method: method.into(),
        })
    }
}

/// Upper-case the first character only.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(GetterProbe::get().method_name("title"), "getTitle");
        assert_eq!(GetterProbe::is().method_name("active"), "isActive");
        assert_eq!(GetterProbe::get().method_name("x"), "getX");
        assert_eq!(GetterProbe::get().method_name("URL"), "getURL");
        assert_eq!(GetterProbe::get().method_name("firstName"), "getFirstName");
    }
}
