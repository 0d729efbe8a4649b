//! Treemap layout: assigns every hierarchy node a rectangle.
//!
//! The root covers the full target size. Each parent's children are tiled in
//! the parent rectangle grown by half the inner padding, then every child is
//! shrunk by the same half, so siblings end up exactly `padding_inner` apart
//! while edges shared with the parent stay flush.

use crate::hierarchy::{Hierarchy, NodeId};
use crate::LayoutError;
use salesmap_core::{Bounds, Size, TreeNode};
use serde::{Deserialize, Serialize};

/// Target aspect ratio for squarified rows (the golden ratio).
pub const PHI: f64 = 1.618_033_988_749_895;

/// Tiling algorithm used to split a parent among its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tiling {
    /// Squarify algorithm (default, best aspect ratios).
    #[default]
    Squarify,
    /// Slice and dice (alternating horizontal/vertical by depth).
    SliceAndDice,
}

/// Treemap layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreemapLayout {
    size: Size,
    padding_inner: f64,
    tiling: Tiling,
}

impl TreemapLayout {
    /// Create a layout covering `size` with no padding.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            padding_inner: 0.0,
            tiling: Tiling::Squarify,
        }
    }

    /// Set the gap between sibling rectangles.
    #[must_use]
    pub const fn padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding;
        self
    }

    /// Set the tiling algorithm.
    #[must_use]
    pub const fn tiling(mut self, tiling: Tiling) -> Self {
        self.tiling = tiling;
        self
    }

    /// Target size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if !self.size.is_valid() {
            return Err(LayoutError::InvalidSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        if !self.padding_inner.is_finite() || self.padding_inner < 0.0 {
            return Err(LayoutError::InvalidPadding(self.padding_inner));
        }
        Ok(())
    }

    /// Build the hierarchy for `root` and lay it out.
    pub fn compute<'a>(&self, root: &'a TreeNode) -> Result<Hierarchy<'a>, LayoutError> {
        let mut hierarchy = Hierarchy::build(root);
        self.apply(&mut hierarchy)?;
        Ok(hierarchy)
    }

    /// Assign bounds to every node of an already built hierarchy.
    pub fn apply(&self, hierarchy: &mut Hierarchy<'_>) -> Result<(), LayoutError> {
        self.validate()?;
        let half = self.padding_inner / 2.0;
        hierarchy.set_bounds(0, Bounds::from_size(self.size));

        for id in hierarchy.descendants() {
            let node = hierarchy.node(id);
            let inset = if node.depth == 0 { 0.0 } else { half };
            let bounds = node.bounds.inset(inset);
            let is_leaf = node.is_leaf();
            hierarchy.set_bounds(id, bounds);

            if !is_leaf {
                let region = bounds.inset(-half);
                match self.tiling {
                    Tiling::Squarify => squarify(hierarchy, id, region),
                    Tiling::SliceAndDice => slice_and_dice(hierarchy, id, region),
                }
            }
        }

        log::debug!(
            "laid out {} nodes in {}x{} (padding {})",
            hierarchy.len(),
            self.size.width,
            self.size.height,
            self.padding_inner
        );
        Ok(())
    }
}

/// Spread `row` left to right across `area`, widths proportional to value.
fn dice(hierarchy: &mut Hierarchy<'_>, row: &[NodeId], row_value: f64, area: Bounds) {
    let k = if row_value == 0.0 {
        0.0
    } else {
        area.width() / row_value
    };
    let mut x = area.x0;
    for &id in row {
        let next = x + hierarchy.node(id).value * k;
        hierarchy.set_bounds(id, Bounds::new(x, area.y0, next, area.y1));
        x = next;
    }
}

/// Stack `row` top to bottom across `area`, heights proportional to value.
fn slice(hierarchy: &mut Hierarchy<'_>, row: &[NodeId], row_value: f64, area: Bounds) {
    let k = if row_value == 0.0 {
        0.0
    } else {
        area.height() / row_value
    };
    let mut y = area.y0;
    for &id in row {
        let next = y + hierarchy.node(id).value * k;
        hierarchy.set_bounds(id, Bounds::new(area.x0, y, area.x1, next));
        y = next;
    }
}

fn slice_and_dice(hierarchy: &mut Hierarchy<'_>, parent: NodeId, area: Bounds) {
    let node = hierarchy.node(parent);
    let children = node.children.clone();
    let value = node.value;
    let depth = node.depth;
    if depth % 2 == 1 {
        slice(hierarchy, &children, value, area);
    } else {
        dice(hierarchy, &children, value, area);
    }
}

/// Squarified tiling (Bruls, Huizing, van Wijk) with a golden-ratio target.
///
/// Children are consumed in order; a row keeps growing while its worst
/// aspect ratio does not get worse, then it is laid along the shorter side
/// of the remaining free area.
fn squarify(hierarchy: &mut Hierarchy<'_>, parent: NodeId, area: Bounds) {
    let children = hierarchy.node(parent).children.clone();
    let values: Vec<f64> = children.iter().map(|&id| hierarchy.node(id).value).collect();
    let n = children.len();
    let mut remaining = hierarchy.node(parent).value;
    let Bounds {
        mut x0,
        mut y0,
        x1,
        y1,
    } = area;

    let mut i0 = 0;
    let mut i1 = 0;
    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Zero-valued nodes ride along with the next non-empty one.
        let mut row_value = values[i1];
        i1 += 1;
        while row_value == 0.0 && i1 < n {
            row_value = values[i1];
            i1 += 1;
        }

        let mut min_value = row_value;
        let mut max_value = row_value;
        let alpha = (dy / dx).max(dx / dy) / (remaining * PHI);
        let mut beta = row_value * row_value * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        while i1 < n {
            let value = values[i1];
            row_value += value;
            min_value = min_value.min(value);
            max_value = max_value.max(value);
            beta = row_value * row_value * alpha;
            let ratio = (max_value / beta).max(beta / min_value);
            if ratio > min_ratio {
                row_value -= value;
                break;
            }
            min_ratio = ratio;
            i1 += 1;
        }

        let row = &children[i0..i1];
        if dx < dy {
            let row_y1 = if remaining == 0.0 {
                y1
            } else {
                y0 + dy * row_value / remaining
            };
            dice(hierarchy, row, row_value, Bounds::new(x0, y0, x1, row_y1));
            if remaining != 0.0 {
                y0 = row_y1;
            }
        } else {
            let row_x1 = if remaining == 0.0 {
                x1
            } else {
                x0 + dx * row_value / remaining
            };
            slice(hierarchy, row, row_value, Bounds::new(x0, y0, row_x1, y1));
            if remaining != 0.0 {
                x0 = row_x1;
            }
        }

        remaining -= row_value;
        i0 = i1;
    }
}
