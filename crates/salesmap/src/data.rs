//! Dataset decoding and structural checks.

use salesmap_core::TreeNode;
use thiserror::Error;

/// Reasons a dataset is rejected before layout.
#[derive(Debug, Error)]
pub enum DataError {
    /// Not valid JSON, or not shaped like a tree node.
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// The root has nothing to draw.
    #[error("dataset root '{0}' has no children")]
    EmptyRoot(String),

    /// A leaf value is negative or not finite.
    #[error("leaf '{name}' has invalid value {value}")]
    InvalidValue { name: String, value: f64 },
}

/// Decode a JSON dataset and check its structure.
pub fn decode_dataset(json: &str) -> Result<TreeNode, DataError> {
    let root: TreeNode = serde_json::from_str(json)?;
    validate_dataset(&root)?;
    log::debug!(
        "decoded dataset '{}' with {} leaves",
        root.name,
        root.leaf_count()
    );
    Ok(root)
}

/// Check that `root` has children and every leaf value is finite and non-negative.
///
/// Zero values and childless branches are accepted; they lay out as
/// degenerate rectangles.
pub fn validate_dataset(root: &TreeNode) -> Result<(), DataError> {
    if root.is_leaf() {
        return Err(DataError::EmptyRoot(root.name.clone()));
    }
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            if !node.value.is_finite() || node.value < 0.0 {
                return Err(DataError::InvalidValue {
                    name: node.name.clone(),
                    value: node.value,
                });
            }
        } else {
            stack.extend(node.children.iter().rev());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_value_types() {
        let root = decode_dataset(
            r#"{"name": "Video Game Sales Data Top 100", "children": [
                {"name": "Wii", "children": [
                    {"name": "Wii Sports", "category": "Wii", "value": "82.53"},
                    {"name": "Mario Kart Wii", "category": "Wii", "value": 35.52}
                ]},
                {"name": "DS", "children": [
                    {"name": "New Super Mario Bros.", "category": "DS", "value": "29.8"}
                ]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(root.leaf_count(), 3);
        assert_eq!(root.children[1].children[0].value, 29.8);
    }

    #[test]
    fn test_malformed_json() {
        let err = decode_dataset(r#"{"name": "root", "children": ["#).unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
        assert!(err.to_string().starts_with("malformed dataset"));

        let err = decode_dataset("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }

    #[test]
    fn test_root_without_children() {
        let err = decode_dataset(r#"{"name": "lonely"}"#).unwrap_err();
        assert!(matches!(err, DataError::EmptyRoot(ref name) if name == "lonely"));

        let err = decode_dataset(r#"{"name": "hollow", "children": []}"#).unwrap_err();
        assert!(matches!(err, DataError::EmptyRoot(_)));
    }

    #[test]
    fn test_negative_leaf_rejected() {
        let err = decode_dataset(
            r#"{"name": "root", "children": [
                {"name": "ok", "category": "A", "value": 1},
                {"name": "group", "children": [
                    {"name": "bad", "category": "A", "value": "-4.5"}
                ]}
            ]}"#,
        )
        .unwrap_err();
        match err {
            DataError::InvalidValue { name, value } => {
                assert_eq!(name, "bad");
                assert_eq!(value, -4.5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_infinite_leaf_rejected() {
        let err = decode_dataset(
            r#"{"name": "root", "children": [{"name": "huge", "category": "A", "value": "inf"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { .. }));
    }

    #[test]
    fn test_zero_and_missing_values_accepted() {
        let root = decode_dataset(
            r#"{"name": "root", "children": [
                {"name": "zero", "category": "A", "value": 0},
                {"name": "missing", "category": "A"},
                {"name": "text", "category": "A", "value": "n/a"},
                {"name": "empty group", "children": []}
            ]}"#,
        )
        .unwrap();
        assert!(root.children.iter().all(|c| c.value == 0.0));
    }

    #[test]
    fn test_validate_built_tree() {
        let root = TreeNode::branch("root", vec![TreeNode::leaf("a", "A", f64::NEG_INFINITY)]);
        assert!(validate_dataset(&root).is_err());
        let root = TreeNode::branch("root", vec![TreeNode::leaf("a", "A", 2.0)]);
        assert!(validate_dataset(&root).is_ok());
    }
}
