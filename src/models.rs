//! Core data model for dirgram
//!
//! Defines `TreeNode`, the unit of input: a displayed path, its
//! description lines, and its children in display order.

use serde::{Deserialize, Deserializer};

/// A single node of the directory description
///
/// Nodes own their children, so the input is a strict tree by
/// construction. Sibling order is insertion order and is preserved all
/// the way to the rendered output; nothing downstream sorts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeNode {
    /// Displayed label, e.g. `~/.cache/bazel/` or `_bazel_<user-name>`
    pub path: String,

    /// Description lines attached to this node
    ///
    /// Accepts either a YAML scalar (treated as a one-line list) or a
    /// sequence of strings. A missing or null `desc` is an empty list.
    #[serde(default, deserialize_with = "string_or_seq")]
    pub desc: Vec<String>,

    /// Child nodes in display order
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node with no description
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            desc: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Deserialize `desc` from either a scalar string or a sequence
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrSeq;

    impl<'de> serde::de::Visitor<'de> for StringOrSeq {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or a sequence of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(vec![value.to_owned()])
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut lines = Vec::new();
            while let Some(line) = seq.next_element::<String>()? {
                lines.push(line);
            }
            Ok(lines)
        }
    }

    deserializer.deserialize_any(StringOrSeq)
}
