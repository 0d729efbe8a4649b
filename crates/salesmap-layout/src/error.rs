//! Error types for salesmap-layout.

use thiserror::Error;

/// Errors raised before any rectangle is assigned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Target size has a negative or non-finite extent.
    #[error("invalid layout size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    /// Inner padding is negative or non-finite.
    #[error("invalid inner padding: {0}")]
    InvalidPadding(f64),
}
