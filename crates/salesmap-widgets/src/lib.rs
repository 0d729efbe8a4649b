//! Rendering for the salesmap treemap chart.
//!
//! [`render_chart`] lays out a [`salesmap_core::TreeNode`], colors its
//! categories and draws tiles, labels and the legend onto any [`Surface`].
//! Hover behaviour goes through a [`TooltipView`], so the same code drives the
//! browser DOM and the in-memory [`Scene`].

mod chart;
mod color_map;
mod element;
mod label;
mod legend;
mod scene;
mod surface;
mod tile;
mod tooltip;

pub use chart::{render_chart, RenderError, RenderSummary};
pub use color_map::{ramp_position, ColorMap};
pub use element::{Element, ElementKind};
pub use label::{clip_id, clip_url, line_positions, words};
pub use legend::render_legend;
pub use scene::{Scene, SceneNode, SceneNodeId, SceneTooltip};
pub use surface::{Surface, SurfaceError};
pub use tile::render_tile;
pub use tooltip::{HoverHandler, InfoField, LeafDatum, SharedTooltip, TooltipView};
