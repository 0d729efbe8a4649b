//! Top-level error for loading and rendering a chart.

use crate::data::DataError;
use salesmap_widgets::{RenderError, SurfaceError};
use salesmap_yaml::ParseError;
use thiserror::Error;

/// Anything that can stop a chart from appearing.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The dataset could not be fetched.
    #[error("failed to fetch dataset: {0}")]
    Fetch(String),

    /// The dataset is malformed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The configuration document is malformed.
    #[error(transparent)]
    Config(#[from] ParseError),

    /// Layout or drawing failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The host page is missing something the chart binds to.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
