//! Hierarchy and treemap layout for salesmap.
//!
//! [`Hierarchy::build`] turns an input [`salesmap_core::TreeNode`] into a
//! summed, sorted arena; [`TreemapLayout`] then assigns every node a
//! rectangle inside the target size.
//!
//! ```
//! use salesmap_core::{Size, TreeNode};
//! use salesmap_layout::TreemapLayout;
//!
//! let root = TreeNode::branch("games", vec![
//!     TreeNode::leaf("Wii Sports", "Wii", 82.53),
//!     TreeNode::leaf("Tetris", "GB", 30.26),
//! ]);
//! let hierarchy = TreemapLayout::new(Size::new(800.0, 720.0))
//!     .padding_inner(2.0)
//!     .compute(&root)
//!     .unwrap();
//! assert_eq!(hierarchy.laid_out_leaves().len(), 2);
//! ```

mod error;
mod hierarchy;
mod treemap;

pub use error::LayoutError;
pub use hierarchy::{Hierarchy, HierarchyNode, LaidOutLeaf, NodeId};
pub use treemap::{Tiling, TreemapLayout, PHI};
