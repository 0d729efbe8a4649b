//! Core types for the salesmap treemap chart.
//!
//! This crate provides foundational types used throughout salesmap:
//! - Geometric primitives: [`Point`], [`Size`], [`Bounds`]
//! - Color representation: [`Color`] and the sequential [`Ramp`]s
//! - Pointer events: [`Event`]
//! - The input document model: [`TreeNode`]

mod color;
mod event;
mod geometry;
mod node;
mod ramp;

pub use color::Color;
pub use event::Event;
pub use geometry::{Bounds, Point, Size};
pub use node::TreeNode;
pub use ramp::Ramp;
