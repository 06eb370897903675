//! CSS variable prefix rewriting.
//!
//! Utility generators emit variables with the conventional `--un-` prefix.
//! When a theme is configured with a different prefix, generated CSS must be
//! rewritten so that utilities and theme declarations agree.
//!
//! ```rust
//! use duotone::prefix::{CssEntry, PrefixRewriter};
//!
//! let rewriter = PrefixRewriter::for_prefix("app-").unwrap();
//! let mut entry = CssEntry::new("--un-ring-color", "rgb(var(--un-colors-primary))");
//! rewriter.rewrite_entry(&mut entry);
//!
//! assert_eq!(entry.property, "--app-ring-color");
//! assert_eq!(entry.value, "rgb(var(--app-colors-primary))");
//!
//! assert!(PrefixRewriter::for_prefix("un-").is_none());
//! ```

use std::borrow::Cow;

/// The prefix utilities are generated with.
pub const DEFAULT_PREFIX: &str = "un-";

const DEFAULT_VARIABLE: &str = "--un-";
const DEFAULT_REFERENCE: &str = "var(--un-";

/// Replaces every `--un-` in `css` with `--{prefix}`.
///
/// Borrows when the prefix is the default or nothing matches.
pub fn rewrite_css_prefix<'a>(css: &'a str, prefix: &str) -> Cow<'a, str> {
    if prefix == DEFAULT_PREFIX || !css.contains(DEFAULT_VARIABLE) {
        return Cow::Borrowed(css);
    }
    Cow::Owned(css.replace(DEFAULT_VARIABLE, &format!("--{}", prefix)))
}

/// One `property: value` pair of a generated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssEntry {
    pub property: String,
    pub value: String,
}

impl CssEntry {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Rewrites generated rule entries to a custom variable prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRewriter {
    variable: String,
    reference: String,
}

impl PrefixRewriter {
    /// Returns a rewriter for `prefix`, or `None` when the prefix is already
    /// the default and nothing needs rewriting.
    pub fn for_prefix(prefix: &str) -> Option<Self> {
        if prefix == DEFAULT_PREFIX {
            return None;
        }
        Some(Self {
            variable: format!("--{}", prefix),
            reference: format!("var(--{}", prefix),
        })
    }

    /// Rewrites a leading `--un-` in the property and every `var(--un-` in
    /// the value.
    pub fn rewrite_entry(&self, entry: &mut CssEntry) {
        if let Some(rest) = entry.property.strip_prefix(DEFAULT_VARIABLE) {
            entry.property = format!("{}{}", self.variable, rest);
        }
        if entry.value.contains(DEFAULT_REFERENCE) {
            entry.value = entry.value.replace(DEFAULT_REFERENCE, &self.reference);
        }
    }

    pub fn rewrite_entries(&self, entries: &mut [CssEntry]) {
        for entry in entries {
            self.rewrite_entry(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Text rewriting
    // =========================================================================

    #[test]
    fn test_default_prefix_borrows() {
        let css = "--un-colors-primary:255 0 0;";
        assert!(matches!(rewrite_css_prefix(css, "un-"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_custom_prefix_replaces_all() {
        let css = "--un-a:1 2 3;--un-b:4 5 6;";
        assert_eq!(rewrite_css_prefix(css, "app-"), "--app-a:1 2 3;--app-b:4 5 6;");
    }

    #[test]
    fn test_no_match_borrows() {
        let css = "--theme-a:1 2 3;";
        assert!(matches!(rewrite_css_prefix(css, "app-"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_empty_custom_prefix() {
        assert_eq!(rewrite_css_prefix("--un-a:0 0 0;", ""), "--a:0 0 0;");
    }

    // =========================================================================
    // Entry rewriting
    // =========================================================================

    #[test]
    fn test_rewriter_for_default_prefix_is_none() {
        assert_eq!(PrefixRewriter::for_prefix("un-"), None);
        assert!(PrefixRewriter::for_prefix("theme-").is_some());
    }

    #[test]
    fn test_property_only_rewritten_at_start() {
        let rewriter = PrefixRewriter::for_prefix("app-").unwrap();
        let mut entry = CssEntry::new("color", "red");
        rewriter.rewrite_entry(&mut entry);
        assert_eq!(entry, CssEntry::new("color", "red"));

        let mut entry = CssEntry::new("x--un-y", "red");
        rewriter.rewrite_entry(&mut entry);
        assert_eq!(entry.property, "x--un-y");
    }

    #[test]
    fn test_value_references_rewritten_globally() {
        let rewriter = PrefixRewriter::for_prefix("app-").unwrap();
        let mut entry = CssEntry::new(
            "box-shadow",
            "var(--un-ring-offset-shadow), var(--un-ring-shadow)",
        );
        rewriter.rewrite_entry(&mut entry);
        assert_eq!(
            entry.value,
            "var(--app-ring-offset-shadow), var(--app-ring-shadow)"
        );
    }

    #[test]
    fn test_bare_variable_in_value_untouched() {
        let rewriter = PrefixRewriter::for_prefix("app-").unwrap();
        let mut entry = CssEntry::new("content", "'--un-'");
        rewriter.rewrite_entry(&mut entry);
        assert_eq!(entry.value, "'--un-'");
    }

    #[test]
    fn test_rewrite_entries() {
        let rewriter = PrefixRewriter::for_prefix("app-").unwrap();
        let mut entries = vec![
            CssEntry::new("--un-text-opacity", "1"),
            CssEntry::new("color", "rgb(var(--un-colors-primary) / var(--un-text-opacity))"),
        ];
        rewriter.rewrite_entries(&mut entries);
        assert_eq!(
            entries,
            [
                CssEntry::new("--app-text-opacity", "1"),
                CssEntry::new(
                    "color",
                    "rgb(var(--app-colors-primary) / var(--app-text-opacity))"
                ),
            ]
        );
    }
}
