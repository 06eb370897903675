//! Theme flattening.
//!
//! Flattening walks a theme tree depth-first and replaces every color leaf
//! with a reference to a CSS custom property, recording the original color
//! under that property's name:
//!
//! ```rust
//! use duotone::{flatten_theme, ColorNode, RawValueMap};
//! use serde_json::json;
//!
//! let theme = ColorNode::from(json!({ "colors": { "primary": "#fff" } }));
//! let mut base = RawValueMap::new();
//!
//! let flat = flatten_theme(&theme, "un-", &mut base);
//!
//! assert_eq!(
//!     flat,
//!     ColorNode::from(json!({ "colors": { "primary": "rgb(var(--un-colors-primary))" } })),
//! );
//! assert_eq!(base.get("--un-colors-primary"), Some("#fff"));
//! ```
//!
//! Variable names depend only on the prefix and the key path, so the light
//! and dark variants of a theme produce the same names and the rewritten
//! tree works for either.

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use log::trace;
use serde::Serialize;
use serde_json::Value;

use crate::theme::ColorNode;

/// Wraps an expression in `var(...)`.
pub fn wrap_var(name: &str) -> String {
    format!("var({})", name)
}

/// Wraps an expression in `rgb(...)`.
pub fn wrap_rgb(expr: &str) -> String {
    format!("rgb({})", expr)
}

// ─── VariableName ───────────────────────────────────────────────────────────

/// A CSS custom-property name, `--{prefix}{path}` with path segments joined
/// by `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VariableName(String);

impl VariableName {
    /// Builds the name for a key path.
    ///
    /// ```rust
    /// use duotone::VariableName;
    ///
    /// let name = VariableName::from_path("theme-", &["colors", "primary", "DEFAULT"]);
    /// assert_eq!(name.as_str(), "--theme-colors-primary-DEFAULT");
    /// assert_eq!(name.reference(), "rgb(var(--theme-colors-primary-DEFAULT))");
    /// ```
    pub fn from_path<S: AsRef<str>>(prefix: &str, path: &[S]) -> Self {
        let joined = path
            .iter()
            .map(|segment| segment.as_ref())
            .collect::<Vec<_>>()
            .join("-");
        VariableName(format!("--{}{}", prefix, joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `rgb(var(--name))` expression that replaces a leaf.
    pub fn reference(&self) -> String {
        wrap_rgb(&wrap_var(&self.0))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VariableName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VariableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─── RawValueMap ────────────────────────────────────────────────────────────

/// Variable name to the color text found in the theme, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawValueMap(IndexMap<VariableName, String>);

impl RawValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value. A repeated name keeps its first position and takes
    /// the latest value.
    pub fn insert(&mut self, name: VariableName, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, VariableName, String> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &VariableName> {
        self.0.keys()
    }
}

impl<'a> IntoIterator for &'a RawValueMap {
    type Item = (&'a VariableName, &'a String);
    type IntoIter = indexmap::map::Iter<'a, VariableName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for RawValueMap {
    type Item = (VariableName, String);
    type IntoIter = indexmap::map::IntoIter<VariableName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ─── Flattening ─────────────────────────────────────────────────────────────

/// Rewrites every leaf of `theme` into a variable reference, recording the
/// leaf's text in `base`.
///
/// The root must be a mapping of categories (`colors`, `textColor`, ...).
/// Any other root is returned as-is and nothing is recorded. Only values
/// inside a category mapping become variables: a category whose value is
/// a string or any other non-mapping is kept unchanged, and a `null`
/// category is dropped. Inside the categories:
///
/// - a string leaf at path `p` becomes `rgb(var(--{prefix}{p}))` and
///   `base[--{prefix}{p}]` is set to the string, even when it is empty;
/// - mappings keep their keys and are walked recursively; empty mappings
///   stay empty;
/// - `null` entries are dropped;
/// - any other value is kept unchanged and recorded nowhere.
///
/// Leaves are not inspected, so an already rewritten reference is treated
/// like any other color text.
pub fn flatten_theme(theme: &ColorNode, prefix: &str, base: &mut RawValueMap) -> ColorNode {
    let categories = match theme {
        ColorNode::Nested(categories) => categories,
        other => return other.clone(),
    };

    let mut out = IndexMap::with_capacity(categories.len());
    for (key, category) in categories {
        let flat = match category {
            ColorNode::Nested(children) => {
                let mut path = vec![key.as_str()];
                ColorNode::Nested(flatten_children(children, prefix, &mut path, base))
            }
            ColorNode::Other(Value::Null) => continue,
            other => other.clone(),
        };
        out.insert(key.clone(), flat);
    }
    ColorNode::Nested(out)
}

/// Flattens into a fresh map and returns both halves.
pub fn flatten_theme_fresh(theme: &ColorNode, prefix: &str) -> (ColorNode, RawValueMap) {
    let mut base = RawValueMap::new();
    let flat = flatten_theme(theme, prefix, &mut base);
    (flat, base)
}

fn flatten_children<'a>(
    children: &'a IndexMap<String, ColorNode>,
    prefix: &str,
    path: &mut Vec<&'a str>,
    base: &mut RawValueMap,
) -> IndexMap<String, ColorNode> {
    let mut out = IndexMap::with_capacity(children.len());

    for (key, node) in children {
        path.push(key);
        if let Some(rewritten) = flatten_node(node, prefix, path, base) {
            out.insert(key.clone(), rewritten);
        }
        path.pop();
    }

    out
}

fn flatten_node<'a>(
    node: &'a ColorNode,
    prefix: &str,
    path: &mut Vec<&'a str>,
    base: &mut RawValueMap,
) -> Option<ColorNode> {
    match node {
        ColorNode::Leaf(text) => {
            let name = VariableName::from_path(prefix, path.as_slice());
            trace!("{} = {:?}", name, text);
            let reference = name.reference();
            base.insert(name, text.as_str());
            Some(ColorNode::Leaf(reference))
        }
        ColorNode::Nested(children) => Some(ColorNode::Nested(flatten_children(
            children, prefix, path, base,
        ))),
        ColorNode::Other(Value::Null) => None,
        ColorNode::Other(value) => Some(ColorNode::Other(value.clone())),
    }
}
