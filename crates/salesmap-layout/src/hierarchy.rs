//! Parent-linked hierarchy over an input [`TreeNode`].
//!
//! Nodes live in an arena indexed by [`NodeId`]. Building a hierarchy sums
//! values bottom-up and sorts every child list by descending height, then
//! descending value. The sort is stable, so ties keep document order.

use salesmap_core::{Bounds, TreeNode};
use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};

/// Index of a node inside a [`Hierarchy`].
pub type NodeId = usize;

/// One node of a built hierarchy.
#[derive(Debug, Clone)]
pub struct HierarchyNode<'a> {
    /// Source node
    pub data: &'a TreeNode,
    /// Distance from the root (root = 0)
    pub depth: usize,
    /// Distance to the deepest descendant leaf (leaf = 0)
    pub height: usize,
    /// Own value for leaves, sum of children otherwise
    pub value: f64,
    /// Parent node, `None` for the root
    pub parent: Option<NodeId>,
    /// Children in sorted order
    pub children: Vec<NodeId>,
    /// Laid-out rectangle; all zero until a layout runs
    pub bounds: Bounds,
}

impl HierarchyNode<'_> {
    /// Check if this is a leaf node.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A leaf after layout.
#[derive(Debug, Clone, Copy)]
pub struct LaidOutLeaf<'a> {
    /// Position among the leaves (pre-order of the sorted tree)
    pub index: usize,
    /// Source node
    pub data: &'a TreeNode,
    /// Summed value
    pub value: f64,
    /// Assigned rectangle
    pub bounds: Bounds,
}

/// Arena of hierarchy nodes; index 0 is the root.
#[derive(Debug, Clone)]
pub struct Hierarchy<'a> {
    nodes: Vec<HierarchyNode<'a>>,
}

impl<'a> Hierarchy<'a> {
    /// Build, sum and sort the hierarchy rooted at `root`.
    #[must_use]
    pub fn build(root: &'a TreeNode) -> Self {
        let mut nodes = vec![HierarchyNode {
            data: root,
            depth: 0,
            height: 0,
            value: 0.0,
            parent: None,
            children: Vec::new(),
            bounds: Bounds::default(),
        }];

        // Breadth-first, so every parent id is smaller than its children's ids.
        let mut queue = VecDeque::from([0]);
        while let Some(id) = queue.pop_front() {
            let data = nodes[id].data;
            let depth = nodes[id].depth;
            for child in &data.children {
                let child_id = nodes.len();
                nodes.push(HierarchyNode {
                    data: child,
                    depth: depth + 1,
                    height: 0,
                    value: 0.0,
                    parent: Some(id),
                    children: Vec::new(),
                    bounds: Bounds::default(),
                });
                nodes[id].children.push(child_id);
                queue.push_back(child_id);
            }
        }

        let mut hierarchy = Self { nodes };
        hierarchy.sum();
        hierarchy.sort();
        log::debug!(
            "built hierarchy: {} nodes, {} leaves, height {}",
            hierarchy.len(),
            hierarchy.leaves().len(),
            hierarchy.root().height
        );
        hierarchy
    }

    fn sum(&mut self) {
        for id in (0..self.nodes.len()).rev() {
            let node = &self.nodes[id];
            let (value, height) = if node.is_leaf() {
                let own = node.data.value;
                (if own.is_nan() { 0.0 } else { own }, 0)
            } else {
                node.children.iter().fold((0.0, 0), |(sum, height), &c| {
                    let child = &self.nodes[c];
                    (sum + child.value, height.max(child.height + 1))
                })
            };
            self.nodes[id].value = value;
            self.nodes[id].height = height;
        }
    }

    fn sort(&mut self) {
        for id in 0..self.nodes.len() {
            let mut children = std::mem::take(&mut self.nodes[id].children);
            children.sort_by(|&a, &b| {
                let (a, b) = (&self.nodes[a], &self.nodes[b]);
                b.height
                    .cmp(&a.height)
                    .then_with(|| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
            });
            self.nodes[id].children = children;
        }
    }

    /// Root node.
    #[must_use]
    pub fn root(&self) -> &HierarchyNode<'a> {
        &self.nodes[0]
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this hierarchy.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &HierarchyNode<'a> {
        &self.nodes[id]
    }

    pub(crate) fn set_bounds(&mut self, id: NodeId, bounds: Bounds) {
        self.nodes[id].bounds = bounds;
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A hierarchy always holds its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All node ids in pre-order over the sorted children.
    #[must_use]
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![0];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id].children.iter().rev());
        }
        order
    }

    /// Leaf ids in pre-order over the sorted children.
    #[must_use]
    pub fn leaves(&self) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|&id| self.nodes[id].is_leaf())
            .collect()
    }

    /// Leaves with their assigned rectangles.
    #[must_use]
    pub fn laid_out_leaves(&self) -> Vec<LaidOutLeaf<'a>> {
        self.leaves()
            .into_iter()
            .enumerate()
            .map(|(index, id)| {
                let node = &self.nodes[id];
                LaidOutLeaf {
                    index,
                    data: node.data,
                    value: node.value,
                    bounds: node.bounds,
                }
            })
            .collect()
    }

    /// Distinct leaf categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.leaves()
            .into_iter()
            .map(|id| self.nodes[id].data.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::branch(
            "root",
            vec![
                TreeNode::leaf("loose", "X", 50.0),
                TreeNode::branch(
                    "small",
                    vec![TreeNode::leaf("s1", "A", 1.0), TreeNode::leaf("s2", "B", 2.0)],
                ),
                TreeNode::branch(
                    "big",
                    vec![TreeNode::leaf("b1", "B", 10.0), TreeNode::leaf("b2", "A", 30.0)],
                ),
            ],
        )
    }

    fn names(h: &Hierarchy<'_>, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| h.node(id).data.name.clone()).collect()
    }

    #[test]
    fn test_sums_values() {
        let root = sample();
        let h = Hierarchy::build(&root);
        assert_eq!(h.root().value, 93.0);
        assert_eq!(h.len(), 8);
    }

    #[test]
    fn test_heights_and_depths() {
        let root = sample();
        let h = Hierarchy::build(&root);
        assert_eq!(h.root().height, 2);
        assert_eq!(h.root().depth, 0);
        for id in h.leaves() {
            assert_eq!(h.node(id).height, 0);
        }
        let big = h.root().children[0];
        assert_eq!(h.node(big).data.name, "big");
        assert_eq!(h.node(big).depth, 1);
        assert_eq!(h.node(big).height, 1);
        assert_eq!(h.node(big).parent, Some(0));
    }

    #[test]
    fn test_sort_height_then_value() {
        let root = sample();
        let h = Hierarchy::build(&root);
        // Branches (height 1) come before the leaf even though the leaf is larger.
        assert_eq!(names(&h, &h.root().children), ["big", "small", "loose"]);
        assert_eq!(
            names(&h, &h.leaves()),
            ["b2", "b1", "s2", "s1", "loose"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let root = TreeNode::branch(
            "root",
            vec![
                TreeNode::leaf("first", "A", 5.0),
                TreeNode::leaf("second", "A", 5.0),
                TreeNode::leaf("third", "A", 5.0),
            ],
        );
        let h = Hierarchy::build(&root);
        assert_eq!(names(&h, &h.leaves()), ["first", "second", "third"]);
    }

    #[test]
    fn test_categories_first_seen_after_sort() {
        let root = sample();
        let h = Hierarchy::build(&root);
        assert_eq!(h.categories(), ["A", "B", "X"]);
    }

    #[test]
    fn test_empty_children_is_leaf() {
        let root = TreeNode::branch(
            "root",
            vec![TreeNode::branch("hollow", vec![]), TreeNode::leaf("a", "A", 3.0)],
        );
        let h = Hierarchy::build(&root);
        assert_eq!(h.leaves().len(), 2);
        assert_eq!(h.root().value, 3.0);
    }

    #[test]
    fn test_lone_root_is_its_own_leaf() {
        let root = TreeNode::leaf("solo", "S", 4.0);
        let h = Hierarchy::build(&root);
        assert_eq!(h.leaves(), vec![0]);
        assert_eq!(h.root().value, 4.0);
        assert!(!h.is_empty());
    }

    #[test]
    fn test_duplicate_names_are_distinct_nodes() {
        let root = TreeNode::branch(
            "root",
            vec![TreeNode::leaf("dup", "A", 1.0), TreeNode::leaf("dup", "A", 2.0)],
        );
        let h = Hierarchy::build(&root);
        let leaves = h.laid_out_leaves();
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].value, 2.0);
        assert_eq!(leaves[1].value, 1.0);
        assert_eq!(leaves[1].index, 1);
    }

    #[test]
    fn test_nan_value_counts_as_zero() {
        let root = TreeNode::branch(
            "root",
            vec![TreeNode::leaf("nan", "A", f64::NAN), TreeNode::leaf("a", "A", 1.0)],
        );
        let h = Hierarchy::build(&root);
        assert_eq!(h.root().value, 1.0);
    }
}
