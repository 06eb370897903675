//! The theme tree.
//!
//! A theme is a nested mapping whose leaves are color strings:
//!
//! ```yaml
//! colors:
//!   primary:
//!     DEFAULT: "#3B82F6"
//!     light: "#60A5FA"
//!   secondary: "#FF4500"
//! textColor:
//!   muted: "#6B7280"
//! ```
//!
//! [`ColorNode`] models one node of that tree. Key order is kept exactly as
//! written, so generated variables and declarations follow the input order.
//!
//! Keys are always strings. Scalar keys that YAML would otherwise read as
//! numbers or booleans (`50:`, `true:`) are converted to their text form, so
//! palettes like `gray: { 50: ..., 100: ... }` work without quoting.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// One node of a theme tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorNode {
    /// A color as written in the theme.
    Leaf(String),
    /// A nested group of named nodes.
    Nested(IndexMap<String, ColorNode>),
    /// Anything else (numbers, booleans, arrays, null). Carried through the
    /// flattener without producing variables.
    Other(Value),
}

impl ColorNode {
    /// An empty mapping.
    pub fn empty() -> Self {
        ColorNode::Nested(IndexMap::new())
    }

    /// Returns the child at `key` when this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&ColorNode> {
        match self {
            ColorNode::Nested(map) => map.get(key),
            _ => None,
        }
    }

    /// Follows a path of keys from this node.
    ///
    /// ```rust
    /// use duotone::ColorNode;
    /// use serde_json::json;
    ///
    /// let theme = ColorNode::from(json!({ "colors": { "primary": "#fff" } }));
    /// assert_eq!(
    ///     theme.get_path(&["colors", "primary"]).and_then(ColorNode::as_leaf),
    ///     Some("#fff"),
    /// );
    /// ```
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&ColorNode> {
        path.iter()
            .try_fold(self, |node, key| node.get(key.as_ref()))
    }

    /// The leaf text, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            ColorNode::Leaf(text) => Some(text),
            _ => None,
        }
    }

    /// The children, if this is a mapping.
    pub fn as_nested(&self) -> Option<&IndexMap<String, ColorNode>> {
        match self {
            ColorNode::Nested(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, ColorNode::Nested(_))
    }

    /// Converts the tree into a JSON value, keeping key order.
    pub fn to_json(&self) -> Value {
        match self {
            ColorNode::Leaf(text) => Value::String(text.clone()),
            ColorNode::Nested(map) => Value::Object(
                map.iter()
                    .map(|(key, node)| (key.clone(), node.to_json()))
                    .collect(),
            ),
            ColorNode::Other(value) => value.clone(),
        }
    }
}

impl Default for ColorNode {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for ColorNode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => ColorNode::Leaf(text),
            Value::Object(map) => ColorNode::Nested(
                map.into_iter()
                    .map(|(key, value)| (key, ColorNode::from(value)))
                    .collect(),
            ),
            other => ColorNode::Other(other),
        }
    }
}

impl From<&str> for ColorNode {
    fn from(text: &str) -> Self {
        ColorNode::Leaf(text.to_string())
    }
}

impl From<String> for ColorNode {
    fn from(text: String) -> Self {
        ColorNode::Leaf(text)
    }
}

impl<K: Into<String>> FromIterator<(K, ColorNode)> for ColorNode {
    fn from_iter<I: IntoIterator<Item = (K, ColorNode)>>(iter: I) -> Self {
        ColorNode::Nested(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ─── Serde ──────────────────────────────────────────────────────────────────

impl Serialize for ColorNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColorNode::Leaf(text) => serializer.serialize_str(text),
            ColorNode::Nested(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (key, node) in children {
                    map.serialize_entry(key, node)?;
                }
                map.end()
            }
            ColorNode::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ColorNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColorNodeVisitor)
    }
}

struct ColorNodeVisitor;

impl<'de> Visitor<'de> for ColorNodeVisitor {
    type Value = ColorNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a color string or a mapping of theme keys")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ColorNode, E> {
        Ok(ColorNode::Leaf(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ColorNode, E> {
        Ok(ColorNode::Leaf(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ColorNode, E> {
        Ok(ColorNode::Other(Value::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ColorNode, E> {
        Ok(ColorNode::Other(Value::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ColorNode, E> {
        Ok(ColorNode::Other(Value::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ColorNode, E> {
        Ok(ColorNode::Other(Value::from(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ColorNode, E> {
        Ok(ColorNode::Other(Value::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<ColorNode, E> {
        Ok(ColorNode::Other(Value::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ColorNode, D::Error> {
        ColorNode::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ColorNode, A::Error> {
        let mut items = Vec::new();
        while let Some(node) = seq.next_element::<ColorNode>()? {
            items.push(node.to_json());
        }
        Ok(ColorNode::Other(Value::Array(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ColorNode, A::Error> {
        let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((NodeKey(key), node)) = access.next_entry::<NodeKey, ColorNode>()? {
            map.insert(key, node);
        }
        Ok(ColorNode::Nested(map))
    }
}

/// A mapping key, accepting any scalar and keeping its text form.
struct NodeKey(String);

impl<'de> Deserialize<'de> for NodeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeKeyVisitor)
    }
}

struct NodeKeyVisitor;

impl<'de> Visitor<'de> for NodeKeyVisitor {
    type Value = NodeKey;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number or boolean key")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeKey, E> {
        Ok(NodeKey(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<NodeKey, E> {
        Ok(NodeKey(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<NodeKey, E> {
        Ok(NodeKey(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeKey, E> {
        Ok(NodeKey(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeKey, E> {
        Ok(NodeKey(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<NodeKey, E> {
        Ok(NodeKey(v.to_string()))
    }
}
