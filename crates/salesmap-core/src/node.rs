//! Input tree: named, categorized, valued nodes.

use serde::{Deserialize, Deserializer, Serialize};

/// One node of the input document.
///
/// Leaves carry a category and a value; internal nodes only group children.
/// Values arrive either as JSON numbers or as numeric strings (`"82.53"`);
/// anything that does not read as a number counts as `0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeNode {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Category used for coloring and the legend
    #[serde(default)]
    pub category: String,
    /// Leaf value
    #[serde(default, deserialize_with = "lenient_number")]
    pub value: f64,
    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

impl TreeNode {
    /// Create a leaf node.
    #[must_use]
    pub fn leaf(name: &str, category: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            value,
            children: Vec::new(),
        }
    }

    /// Create a branch node.
    #[must_use]
    pub fn branch(name: &str, children: Vec<Self>) -> Self {
        Self {
            name: name.to_string(),
            children,
            ..Self::default()
        }
    }

    /// Check if this is a leaf node.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of leaves below (or at) this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Self::leaf_count).sum()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(n)) => n,
        Some(RawNumber::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Some(RawNumber::Other(_)) | None => 0.0,
    };
    Ok(if value.is_nan() { 0.0 } else { value })
}
