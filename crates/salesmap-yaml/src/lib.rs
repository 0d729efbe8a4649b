//! Chart configuration for salesmap.
//!
//! Every presentational constant of the chart lives in [`ChartConfig`].
//! Each field has a default, so a YAML file only needs the keys it changes.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{
    Anchors, ChartConfig, DataSource, LabelConfig, LegendConfig, Toggle, TooltipConfig,
    DEFAULT_DATA_URL,
};
