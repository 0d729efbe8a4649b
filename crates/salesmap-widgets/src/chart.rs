//! Full chart render: treemap tiles plus legend.

use crate::color_map::ColorMap;
use crate::element::Element;
use crate::legend::render_legend;
use crate::surface::{Surface, SurfaceError};
use crate::tile::render_tile;
use crate::tooltip::SharedTooltip;
use salesmap_core::TreeNode;
use salesmap_layout::{LayoutError, TreemapLayout};
use salesmap_yaml::{ChartConfig, ParseError};
use thiserror::Error;

/// Errors that abort a render.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ParseError),

    /// Layout rejected the target size.
    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    /// The surface refused an operation.
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
}

/// What a render produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    /// Number of leaf tiles drawn
    pub leaf_count: usize,
    /// Categories in legend order
    pub categories: Vec<String>,
    /// Colors used for tiles and legend
    pub color_map: ColorMap,
}

/// Render the treemap for `root` into `target`.
///
/// Previous content of `target` is removed first. Tiles go into a nested
/// `svg` covering the treemap fraction of the width; the legend fills the
/// rest. Every tile and label drives `tooltip` on hover.
pub fn render_chart<S: Surface>(
    config: &ChartConfig,
    root: &TreeNode,
    surface: &mut S,
    target: &S::Node,
    tooltip: SharedTooltip,
) -> Result<RenderSummary, RenderError> {
    config.validate()?;

    let hierarchy = TreemapLayout::new(config.treemap_size())
        .padding_inner(config.padding)
        .tiling(config.tile)
        .compute(root)?;
    let leaves = hierarchy.laid_out_leaves();

    let categories = hierarchy.categories();
    let color_map = ColorMap::assign(&categories);
    for (a, b) in color_map.collisions() {
        log::warn!("categories '{a}' and '{b}' share the same color");
    }

    surface.clear(target)?;
    surface.set_attribute(target, "width", &config.width.to_string())?;
    surface.set_attribute(target, "height", &config.height.to_string())?;

    let diagram = Element::svg()
        .attr("x", 0)
        .attr("y", 0)
        .attr("width", config.treemap_width())
        .attr("height", config.height);
    let diagram = surface.append(target, diagram)?;

    for leaf in &leaves {
        let fill = color_map.get(&leaf.data.category).unwrap_or_default();
        render_tile(surface, &diagram, leaf, fill, config, &tooltip)?;
    }

    render_legend(surface, target, &color_map, config)?;

    log::info!(
        "rendered {} tiles in {} categories",
        leaves.len(),
        color_map.len()
    );
    Ok(RenderSummary {
        leaf_count: leaves.len(),
        categories: categories.into_iter().map(str::to_string).collect(),
        color_map,
    })
}
