//! Leaf tiles: filled rectangle, clip path and per-word labels.

use crate::element::Element;
use crate::label::{clip_id, clip_url, line_positions, words};
use crate::surface::{Surface, SurfaceError};
use crate::tooltip::{HoverHandler, LeafDatum, SharedTooltip};
use salesmap_core::{Bounds, Color};
use salesmap_layout::LaidOutLeaf;
use salesmap_yaml::ChartConfig;
use std::rc::Rc;

fn bounds_rect(bounds: &Bounds) -> Element {
    Element::rect()
        .attr("x", bounds.x0)
        .attr("y", bounds.y0)
        .attr("width", bounds.width())
        .attr("height", bounds.height())
}

/// Draw one leaf into `parent` and wire its hover handler.
///
/// Creates, in order: the `rect.tile`, the `clipPath#text-clip-{index}`
/// holding a copy of the rectangle, and one `text.node-name` per word. The
/// rectangle and every word share a single handler.
pub fn render_tile<S: Surface>(
    surface: &mut S,
    parent: &S::Node,
    leaf: &LaidOutLeaf<'_>,
    fill: Color,
    config: &ChartConfig,
    tooltip: &SharedTooltip,
) -> Result<Rc<HoverHandler>, SurfaceError> {
    let datum = Rc::new(LeafDatum {
        name: leaf.data.name.clone(),
        category: leaf.data.category.clone(),
        value: leaf.value,
    });

    let tile = bounds_rect(&leaf.bounds)
        .class("tile")
        .attr("data-name", &datum.name)
        .attr("data-category", &datum.category)
        .attr("data-value", datum.value_text())
        .attr("fill", fill.to_css());
    let tile = surface.append(parent, tile)?;

    let handler = Rc::new(HoverHandler::new(datum, Rc::clone(tooltip), config.tooltip));
    surface.on_hover(&tile, Rc::clone(&handler))?;

    let clip = surface.append(parent, Element::clip_path().id(clip_id(leaf.index)))?;
    surface.append(&clip, bounds_rect(&leaf.bounds))?;

    let lines = words(&leaf.data.name);
    let positions = line_positions(&leaf.bounds, lines.len(), &config.label);
    for (word, at) in lines.into_iter().zip(positions) {
        let label = Element::text(word)
            .class("node-name")
            .attr("clip-path", clip_url(leaf.index))
            .attr("x", at.x)
            .attr("y", at.y)
            .attr("fill", "black");
        let label = surface.append(parent, label)?;
        surface.on_hover(&label, Rc::clone(&handler))?;
    }

    Ok(handler)
}
