//! Salesmap: an interactive treemap of video-game sales, rendered to SVG.
//!
//! The dataset is a JSON tree of named, categorized, valued leaves. It is
//! laid out with a squarified treemap, colored by category, and drawn with a
//! legend and a hover tooltip.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { render_json, set_log_level } from './salesmap.js';
//!
//! async function main() {
//!     await init();            // fetches the default dataset and renders #graph
//!     set_log_level('debug');
//!     render_json(JSON.stringify(myTree));
//! }
//! ```
//!
//! # Headless Usage
//!
//! ```
//! use salesmap::{render_document, ChartConfig};
//! use salesmap::widgets::{Element, Scene, SceneTooltip, SharedTooltip};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let json = r#"{"name": "root", "children": [
//!     {"name": "Wii Sports", "category": "Sports", "value": "82.74"},
//!     {"name": "Super Mario", "category": "Platform", "value": 40.24}
//! ]}"#;
//!
//! let mut scene = Scene::new(Element::svg().id("graph"));
//! let target = scene.root();
//! let tooltip: SharedTooltip = Rc::new(RefCell::new(SceneTooltip::new()));
//! let summary = render_document(&ChartConfig::default(), json, &mut scene, &target, tooltip)?;
//! assert_eq!(summary.leaf_count, 2);
//! # Ok::<(), salesmap::ChartError>(())
//! ```

pub use salesmap_core::*;
pub use salesmap_layout as layout;
pub use salesmap_widgets as widgets;
pub use salesmap_yaml as yaml;

pub mod browser;
mod data;
mod error;

#[cfg(target_arch = "wasm32")]
pub use browser::{DomSurface, DomTooltip};
pub use data::{decode_dataset, validate_dataset, DataError};
pub use error::ChartError;
pub use salesmap_widgets::{render_chart, RenderError, RenderSummary, Surface, SurfaceError};
pub use salesmap_yaml::ChartConfig;

use salesmap_widgets::SharedTooltip;

/// Decode `json` and render it into `target`.
///
/// Nothing is drawn when the document fails to decode or validate.
pub fn render_document<S: Surface>(
    config: &ChartConfig,
    json: &str,
    surface: &mut S,
    target: &S::Node,
    tooltip: SharedTooltip,
) -> Result<RenderSummary, ChartError> {
    let root = decode_dataset(json)?;
    Ok(render_chart(config, &root, surface, target, tooltip)?)
}
