//! Category legend drawn right of the treemap.

use crate::color_map::ColorMap;
use crate::element::Element;
use crate::surface::{Surface, SurfaceError};
use salesmap_yaml::ChartConfig;

/// Draw `svg#legend` into `parent`: one swatch and one label per category.
pub fn render_legend<S: Surface>(
    surface: &mut S,
    parent: &S::Node,
    colors: &ColorMap,
    config: &ChartConfig,
) -> Result<S::Node, SurfaceError> {
    let legend = Element::svg()
        .id("legend")
        .attr("x", config.treemap_width())
        .attr("y", 0)
        .attr("width", config.legend_width())
        .attr("height", config.height);
    let legend = surface.append(parent, legend)?;

    let geometry = &config.legend;
    for (row, (category, color)) in colors.iter().enumerate() {
        let y = geometry.row_y(row);
        let swatch = Element::rect()
            .class("legend-item")
            .attr("x", geometry.padding)
            .attr("y", y)
            .attr("width", geometry.box_width)
            .attr("height", geometry.box_height)
            .attr("fill", color.to_css());
        surface.append(&legend, swatch)?;

        let label = Element::text(category)
            .attr("x", geometry.label_x())
            .attr("y", y + geometry.box_height)
            .attr("fill", "black");
        surface.append(&legend, label)?;
    }

    Ok(legend)
}
