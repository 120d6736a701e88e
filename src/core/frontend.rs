//! Frontend variant table.
//!
//! The template bundles one skeleton directory per supported frontend.
//! Exactly one is kept per generated project; the other is removed by the
//! provisioning pass. Each variant carries its own table of generated env
//! fields, so adding a variant is a data change, not a control-flow change.

use std::fmt;

use crate::error::{GroundworkError, Result};

/// How one frontend secret field is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSpec {
    /// Unpadded base64url token over this many random bytes.
    UrlSafe(usize),
    /// Padded standard base64 key over this many random bytes.
    Base64Key(usize),
}

/// A supported frontend variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Next,
    Nuxt,
}

impl Frontend {
    /// All recognized variants.
    pub const ALL: &'static [Frontend] = &[Frontend::Next, Frontend::Nuxt];

    /// Parse a variant selector, case-insensitively.
    ///
    /// Unrecognized selectors are a validation error rather than a silent
    /// no-op, so a typo can never leave both skeletons in place.
    pub fn parse(selector: &str) -> Result<Self> {
        match selector.trim().to_lowercase().as_str() {
            "next" => Ok(Frontend::Next),
            "nuxt" => Ok(Frontend::Nuxt),
            other => Err(GroundworkError::UnknownFrontend(other.to_string())),
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Frontend::Next => "next",
            Frontend::Nuxt => "nuxt",
        }
    }

    /// Skeleton directory bundled for this variant.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Frontend::Next => "frontend-next",
            Frontend::Nuxt => "frontend-nuxt",
        }
    }

    /// Skeleton directory that must be removed when this variant is kept.
    pub fn dir_to_remove(&self) -> &'static str {
        match self {
            Frontend::Next => Frontend::Nuxt.dir_name(),
            Frontend::Nuxt => Frontend::Next.dir_name(),
        }
    }

    /// Generated env fields specific to this variant, in output order.
    ///
    /// The shared OIDC credential pair is appended by the planner and is
    /// deliberately absent here.
    pub fn secret_fields(&self) -> &'static [(&'static str, TokenSpec)] {
        match self {
            Frontend::Next => &[("AUTH_SECRET", TokenSpec::UrlSafe(32))],
            Frontend::Nuxt => &[
                ("NUXT_API_SECRET", TokenSpec::UrlSafe(32)),
                ("NUXT_OIDC_TOKEN_KEY", TokenSpec::Base64Key(32)),
                ("NUXT_OIDC_SESSION_SECRET", TokenSpec::UrlSafe(36)),
                ("NUXT_OIDC_AUTH_SESSION_SECRET", TokenSpec::UrlSafe(36)),
            ],
        }
    }
}

impl fmt::Display for Frontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Frontend::parse("next").unwrap(), Frontend::Next);
        assert_eq!(Frontend::parse("NUXT").unwrap(), Frontend::Nuxt);
        assert_eq!(Frontend::parse("  Next ").unwrap(), Frontend::Next);
    }

    #[test]
    fn test_parse_rejects_unknown_variant() {
        let err = Frontend::parse("svelte").unwrap_err();
        assert!(matches!(err, GroundworkError::UnknownFrontend(s) if s == "svelte"));
    }

    #[test]
    fn test_dir_to_remove_is_the_other_variant() {
        assert_eq!(Frontend::Next.dir_to_remove(), "frontend-nuxt");
        assert_eq!(Frontend::Nuxt.dir_to_remove(), "frontend-next");
    }

    #[test]
    fn test_variant_field_names_are_disjoint() {
        let next: Vec<_> = Frontend::Next
            .secret_fields()
            .iter()
            .map(|(k, _)| *k)
            .collect();
        for (key, _) in Frontend::Nuxt.secret_fields() {
            assert!(!next.contains(key));
        }
    }
}
