#![allow(clippy::manual_assert)]
#![allow(clippy::missing_panics_doc)]
//! Testing harness for salesmap charts.
//!
//! Renders a chart into an in-memory [`salesmap_widgets::Scene`] and exposes
//! CSS-like queries and hover simulation over it.
//!
//! ```
//! use salesmap_core::{Point, TreeNode};
//! use salesmap_test::Harness;
//!
//! let root = TreeNode::branch("games", vec![TreeNode::leaf("Tetris", "GB", 30.26)]);
//! let mut harness = Harness::render(&root).unwrap();
//! harness.assert_count("rect.tile", 1);
//! harness
//!     .hover("rect.tile[data-name='Tetris']", Point::new(40.0, 40.0))
//!     .assert_tooltip_visible();
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};
